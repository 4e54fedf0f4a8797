//! Walkthrough of the register → attest flow: two accounts, signed
//! transactions, and ledger reads. Run with `RUST_LOG=info` to see the
//! registry's tracing events.

use axle_core::{state_commitment, StateId, VehicleId};
use axle_dispatch::{Account, Call, Dispatcher};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let owner = Account::from_seed(&[0x11; 32]);
    let signer = Account::from_seed(&[0x22; 32]);
    let mut dispatcher = Dispatcher::new();

    let vehicle = VehicleId::from(1);

    // The owner claims the vehicle and delegates attestation authority.
    let tx = owner.sign_call(
        Call::RegisterVehicle {
            vehicle_id: vehicle,
            signer_address: signer.address(),
        },
        dispatcher.next_nonce(owner.address()),
    )?;
    dispatcher.execute(&tx)?;

    // The signer commits to an off-chain state snapshot.
    let snapshot = json!({
        "vin": "WDB2030421A123456",
        "odometer_km": 48211,
        "service_events": 3,
    });
    let commitment = state_commitment(&snapshot)?;
    let tx = signer.sign_call(
        Call::AttestState {
            vehicle_id: vehicle,
            state_id: StateId::from(1),
            state_hash: commitment,
        },
        dispatcher.next_nonce(signer.address()),
    )?;
    dispatcher.execute(&tx)?;

    let registry = dispatcher.registry();
    println!("owner:  {}", registry.get_owner(vehicle));
    println!("signer: {}", registry.get_signer(vehicle));
    for (state_id, hash) in registry.attestations(vehicle) {
        println!("log:    {state_id} -> {hash}");
    }

    Ok(())
}
