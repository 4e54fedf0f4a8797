//! # The Vehicle Registry
//!
//! Three ledger-style tables with exclusive mutation through two
//! operations:
//!
//! ```text
//! owners:  VehicleId            → Address     (written once, at registration)
//! signers: VehicleId            → Address     (written once, at registration)
//! states:  (VehicleId, StateId) → StateHash   (write-once per key)
//! ```
//!
//! An owner/signer record exists for a vehicle iff that vehicle has been
//! registered, and neither address is ever zero once set. The state log
//! grows monotonically: entries are created by [`attest_state`] and never
//! mutated or deleted.
//!
//! [`attest_state`]: VehicleRegistry::attest_state

use std::collections::BTreeMap;

use axle_core::{Address, StateHash, StateId, VehicleId};

use crate::error::RegistryError;

/// The registry state: three owned tables, mutated only through
/// [`register_vehicle`] and [`attest_state`].
///
/// Storage is permanent — there is no expiry and no garbage collection.
///
/// [`register_vehicle`]: VehicleRegistry::register_vehicle
/// [`attest_state`]: VehicleRegistry::attest_state
#[derive(Debug, Default)]
pub struct VehicleRegistry {
    owners: BTreeMap<VehicleId, Address>,
    signers: BTreeMap<VehicleId, Address>,
    states: BTreeMap<(VehicleId, StateId), StateHash>,
}

impl VehicleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutating operations ──────────────────────────────────────────

    /// Claim a vehicle identity and delegate its signing authority.
    ///
    /// The caller becomes the vehicle's owner; `signer` is the address
    /// authorized to submit attestations. Both records are written
    /// atomically — a precondition failure writes nothing.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::AlreadyRegistered`] if the identity is taken.
    /// - [`RegistryError::InvalidCaller`] if `caller` is zero.
    /// - [`RegistryError::InvalidSigner`] if `signer` is zero.
    pub fn register_vehicle(
        &mut self,
        caller: Address,
        vehicle_id: VehicleId,
        signer: Address,
    ) -> Result<(), RegistryError> {
        // Identity availability is checked before argument validity,
        // matching the ledger's assertion order.
        if self.owners.contains_key(&vehicle_id) {
            return Err(RegistryError::AlreadyRegistered { vehicle_id });
        }
        if caller.is_zero() {
            return Err(RegistryError::InvalidCaller);
        }
        if signer.is_zero() {
            return Err(RegistryError::InvalidSigner);
        }

        self.owners.insert(vehicle_id, caller);
        self.signers.insert(vehicle_id, signer);
        tracing::info!(
            vehicle = %vehicle_id,
            owner = %caller,
            signer = %signer,
            "vehicle registered"
        );
        Ok(())
    }

    /// Anchor a state commitment in a vehicle's log.
    ///
    /// Only the delegated signer may attest, and each `state_id` is
    /// write-once per vehicle: a repeated id is rejected and the stored
    /// commitment remains the first one written.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnknownVehicle`] if the vehicle is not
    ///   registered.
    /// - [`RegistryError::Unauthorized`] if `caller` is not the delegated
    ///   signer.
    /// - [`RegistryError::DuplicateStateId`] if the log already holds an
    ///   entry for `(vehicle_id, state_id)`.
    pub fn attest_state(
        &mut self,
        caller: Address,
        vehicle_id: VehicleId,
        state_id: StateId,
        state_hash: StateHash,
    ) -> Result<(), RegistryError> {
        self.require_signer(vehicle_id, caller)?;
        if self.states.contains_key(&(vehicle_id, state_id)) {
            return Err(RegistryError::DuplicateStateId {
                vehicle_id,
                state_id,
            });
        }

        self.states.insert((vehicle_id, state_id), state_hash);
        tracing::info!(
            vehicle = %vehicle_id,
            state = %state_id,
            commitment = %state_hash,
            "state attested"
        );
        Ok(())
    }

    // ── Read accessors ───────────────────────────────────────────────

    /// The owner of a vehicle, if registered.
    pub fn owner_of(&self, vehicle_id: VehicleId) -> Option<Address> {
        self.owners.get(&vehicle_id).copied()
    }

    /// The delegated signer of a vehicle, if registered.
    pub fn signer_of(&self, vehicle_id: VehicleId) -> Option<Address> {
        self.signers.get(&vehicle_id).copied()
    }

    /// The commitment stored at `(vehicle_id, state_id)`, if any.
    pub fn state_at(&self, vehicle_id: VehicleId, state_id: StateId) -> Option<StateHash> {
        self.states.get(&(vehicle_id, state_id)).copied()
    }

    /// Ledger-surface owner read: zero address when absent.
    pub fn get_owner(&self, vehicle_id: VehicleId) -> Address {
        self.owner_of(vehicle_id).unwrap_or(Address::ZERO)
    }

    /// Ledger-surface signer read: zero address when absent.
    pub fn get_signer(&self, vehicle_id: VehicleId) -> Address {
        self.signer_of(vehicle_id).unwrap_or(Address::ZERO)
    }

    /// Ledger-surface state read: zero commitment when absent.
    pub fn get_state(&self, vehicle_id: VehicleId, state_id: StateId) -> StateHash {
        self.state_at(vehicle_id, state_id).unwrap_or(StateHash::ZERO)
    }

    /// Whether the vehicle identity has been claimed.
    pub fn is_registered(&self, vehicle_id: VehicleId) -> bool {
        self.owners.contains_key(&vehicle_id)
    }

    /// Iterate a vehicle's state log in ascending `StateId` order.
    pub fn attestations(
        &self,
        vehicle_id: VehicleId,
    ) -> impl Iterator<Item = (StateId, StateHash)> + '_ {
        self.states
            .range((vehicle_id, StateId::new(axle_core::Scalar::ZERO))..)
            .take_while(move |((vid, _), _)| *vid == vehicle_id)
            .map(|((_, sid), hash)| (*sid, *hash))
    }

    /// Number of attested checkpoints for a vehicle.
    pub fn attestation_count(&self, vehicle_id: VehicleId) -> usize {
        self.attestations(vehicle_id).count()
    }

    /// Number of registered vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.owners.len()
    }

    /// Validate that the vehicle exists and `caller` is its delegated
    /// signer.
    fn require_signer(
        &self,
        vehicle_id: VehicleId,
        caller: Address,
    ) -> Result<(), RegistryError> {
        let signer = self
            .signers
            .get(&vehicle_id)
            .ok_or(RegistryError::UnknownVehicle { vehicle_id })?;
        if *signer != caller {
            return Err(RegistryError::Unauthorized { vehicle_id, caller });
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: u64 = 0xA0;
    const SIGNER: u64 = 0xB0;

    fn addr(n: u64) -> Address {
        Address::from(n)
    }

    fn registered() -> VehicleRegistry {
        let mut reg = VehicleRegistry::new();
        reg.register_vehicle(addr(OWNER), VehicleId::from(1), addr(SIGNER))
            .unwrap();
        reg
    }

    // ── Registration ─────────────────────────────────────────────────

    #[test]
    fn test_register_records_owner_and_signer() {
        let reg = registered();
        assert_eq!(reg.owner_of(VehicleId::from(1)), Some(addr(OWNER)));
        assert_eq!(reg.signer_of(VehicleId::from(1)), Some(addr(SIGNER)));
        assert!(reg.is_registered(VehicleId::from(1)));
        assert_eq!(reg.vehicle_count(), 1);
    }

    #[test]
    fn test_register_twice_rejected_first_claim_wins() {
        let mut reg = registered();
        let err = reg
            .register_vehicle(addr(0xC0), VehicleId::from(1), addr(0xD0))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::AlreadyRegistered {
                vehicle_id: VehicleId::from(1)
            }
        );
        // Records are still those of the first claim.
        assert_eq!(reg.owner_of(VehicleId::from(1)), Some(addr(OWNER)));
        assert_eq!(reg.signer_of(VehicleId::from(1)), Some(addr(SIGNER)));
    }

    #[test]
    fn test_register_zero_signer_rejected_writes_nothing() {
        let mut reg = VehicleRegistry::new();
        let err = reg
            .register_vehicle(addr(OWNER), VehicleId::from(2), Address::ZERO)
            .unwrap_err();
        assert_eq!(err, RegistryError::InvalidSigner);
        assert!(!reg.is_registered(VehicleId::from(2)));
        assert_eq!(reg.owner_of(VehicleId::from(2)), None);
    }

    #[test]
    fn test_register_zero_caller_rejected() {
        let mut reg = VehicleRegistry::new();
        let err = reg
            .register_vehicle(Address::ZERO, VehicleId::from(2), addr(SIGNER))
            .unwrap_err();
        assert_eq!(err, RegistryError::InvalidCaller);
        assert!(!reg.is_registered(VehicleId::from(2)));
    }

    #[test]
    fn test_taken_identity_reported_before_invalid_signer() {
        // Availability is checked first, so a zero signer against a taken
        // id reports AlreadyRegistered.
        let mut reg = registered();
        let err = reg
            .register_vehicle(addr(OWNER), VehicleId::from(1), Address::ZERO)
            .unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));
    }

    #[test]
    fn test_distinct_vehicles_independent() {
        let mut reg = registered();
        reg.register_vehicle(addr(0xC0), VehicleId::from(2), addr(0xD0))
            .unwrap();
        assert_eq!(reg.owner_of(VehicleId::from(1)), Some(addr(OWNER)));
        assert_eq!(reg.owner_of(VehicleId::from(2)), Some(addr(0xC0)));
        assert_eq!(reg.vehicle_count(), 2);
    }

    // ── Attestation ──────────────────────────────────────────────────

    #[test]
    fn test_attest_stores_commitment() {
        let mut reg = registered();
        reg.attest_state(
            addr(SIGNER),
            VehicleId::from(1),
            StateId::from(1),
            StateHash::from(0xFACE),
        )
        .unwrap();
        assert_eq!(
            reg.state_at(VehicleId::from(1), StateId::from(1)),
            Some(StateHash::from(0xFACE))
        );
    }

    #[test]
    fn test_attest_unregistered_vehicle_rejected() {
        let mut reg = VehicleRegistry::new();
        let err = reg
            .attest_state(
                addr(SIGNER),
                VehicleId::from(9),
                StateId::from(1),
                StateHash::from(1),
            )
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownVehicle {
                vehicle_id: VehicleId::from(9)
            }
        );
        assert_eq!(reg.attestation_count(VehicleId::from(9)), 0);
    }

    #[test]
    fn test_attest_by_owner_rejected() {
        // The owner delegated authority to the signer; the owner itself
        // may not attest.
        let mut reg = registered();
        let err = reg
            .attest_state(
                addr(OWNER),
                VehicleId::from(1),
                StateId::from(1),
                StateHash::from(1),
            )
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::Unauthorized {
                vehicle_id: VehicleId::from(1),
                caller: addr(OWNER)
            }
        );
    }

    #[test]
    fn test_attest_by_stranger_rejected() {
        let mut reg = registered();
        let err = reg
            .attest_state(
                addr(0xEE),
                VehicleId::from(1),
                StateId::from(1),
                StateHash::from(1),
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::Unauthorized { .. }));
        assert_eq!(reg.state_at(VehicleId::from(1), StateId::from(1)), None);
    }

    #[test]
    fn test_duplicate_state_id_rejected_first_write_wins() {
        let mut reg = registered();
        reg.attest_state(
            addr(SIGNER),
            VehicleId::from(1),
            StateId::from(1),
            StateHash::from(0x01),
        )
        .unwrap();
        let err = reg
            .attest_state(
                addr(SIGNER),
                VehicleId::from(1),
                StateId::from(1),
                StateHash::from(0x02),
            )
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateStateId {
                vehicle_id: VehicleId::from(1),
                state_id: StateId::from(1)
            }
        );
        assert_eq!(
            reg.state_at(VehicleId::from(1), StateId::from(1)),
            Some(StateHash::from(0x01))
        );
    }

    #[test]
    fn test_same_state_id_on_other_vehicle_accepted() {
        let mut reg = registered();
        reg.register_vehicle(addr(0xC0), VehicleId::from(2), addr(SIGNER))
            .unwrap();
        reg.attest_state(
            addr(SIGNER),
            VehicleId::from(1),
            StateId::from(1),
            StateHash::from(0x01),
        )
        .unwrap();
        reg.attest_state(
            addr(SIGNER),
            VehicleId::from(2),
            StateId::from(1),
            StateHash::from(0x02),
        )
        .unwrap();
        assert_eq!(
            reg.state_at(VehicleId::from(2), StateId::from(1)),
            Some(StateHash::from(0x02))
        );
    }

    // ── Ledger-surface reads ─────────────────────────────────────────

    #[test]
    fn test_ledger_reads_return_zero_when_absent() {
        let reg = VehicleRegistry::new();
        assert_eq!(reg.get_owner(VehicleId::from(5)), Address::ZERO);
        assert_eq!(reg.get_signer(VehicleId::from(5)), Address::ZERO);
        assert_eq!(
            reg.get_state(VehicleId::from(5), StateId::from(1)),
            StateHash::ZERO
        );
    }

    #[test]
    fn test_ledger_reads_return_values_when_present() {
        let mut reg = registered();
        reg.attest_state(
            addr(SIGNER),
            VehicleId::from(1),
            StateId::from(3),
            StateHash::from(0xAB),
        )
        .unwrap();
        assert_eq!(reg.get_owner(VehicleId::from(1)), addr(OWNER));
        assert_eq!(reg.get_signer(VehicleId::from(1)), addr(SIGNER));
        assert_eq!(
            reg.get_state(VehicleId::from(1), StateId::from(3)),
            StateHash::from(0xAB)
        );
    }

    // ── State log iteration ──────────────────────────────────────────

    #[test]
    fn test_attestations_ordered_by_state_id() {
        let mut reg = registered();
        for sid in [5u64, 1, 3] {
            reg.attest_state(
                addr(SIGNER),
                VehicleId::from(1),
                StateId::from(sid),
                StateHash::from(sid * 10),
            )
            .unwrap();
        }
        let log: Vec<_> = reg.attestations(VehicleId::from(1)).collect();
        assert_eq!(
            log,
            vec![
                (StateId::from(1), StateHash::from(10)),
                (StateId::from(3), StateHash::from(30)),
                (StateId::from(5), StateHash::from(50)),
            ]
        );
        assert_eq!(reg.attestation_count(VehicleId::from(1)), 3);
    }

    #[test]
    fn test_attestations_do_not_leak_across_vehicles() {
        let mut reg = registered();
        reg.register_vehicle(addr(0xC0), VehicleId::from(2), addr(SIGNER))
            .unwrap();
        reg.attest_state(
            addr(SIGNER),
            VehicleId::from(1),
            StateId::from(1),
            StateHash::from(0x11),
        )
        .unwrap();
        reg.attest_state(
            addr(SIGNER),
            VehicleId::from(2),
            StateId::from(2),
            StateHash::from(0x22),
        )
        .unwrap();

        let log: Vec<_> = reg.attestations(VehicleId::from(1)).collect();
        assert_eq!(log, vec![(StateId::from(1), StateHash::from(0x11))]);
        assert_eq!(reg.attestation_count(VehicleId::from(2)), 1);
    }

    #[test]
    fn test_attestations_empty_for_unregistered() {
        let reg = VehicleRegistry::new();
        assert_eq!(reg.attestations(VehicleId::from(1)).count(), 0);
    }
}
