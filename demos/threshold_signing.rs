use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::fmt;

use tibs::{
    IdentityBasedSignature, PairingEngine, SchemeConfig, ThresholdConfig, ThresholdScheme,
    ThresholdSignature, UniformAuthority,
};

const IDENTITY: &str = "00101";
const MESSAGE: &str = "0110011010";
const SERVERS: usize = 10;
const THRESHOLD: usize = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_ansi(false)
        .init();

    let mut rng = StdRng::seed_from_u64(42);

    let scheme = ThresholdScheme::<PairingEngine>::new();

    info!(
        servers = SERVERS,
        threshold = THRESHOLD,
        "starting threshold signing example"
    );

    // One-time trusted setup.
    let config = SchemeConfig::new(IDENTITY.len(), MESSAGE.len())?;
    let (params, master) = scheme.setup(&mut rng, &UniformAuthority, &config)?;

    // Extract the identity's key and sign directly once.
    let key = scheme.extract(&mut rng, &params, &master, IDENTITY)?;
    let direct = scheme.sign(&mut rng, &params, &key, MESSAGE)?;
    info!(
        valid = scheme.verify(&params, IDENTITY, MESSAGE, &direct),
        "single-party signature"
    );

    // Split the key across the servers.
    let threshold_config = ThresholdConfig::new(SERVERS, THRESHOLD)?;
    let (keys, _blinding) =
        scheme.distribute_key(&mut rng, &params, &key, IDENTITY, &threshold_config)?;

    // Collect partial signatures from a qualifying subset.
    let participants = [2u32, 5, 9];
    let mut shares = Vec::with_capacity(participants.len());
    for &server in &participants {
        let share = keys.share(server).expect("server was dealt a share");
        let partial = scheme.partial_sign(&mut rng, &params, share, IDENTITY, MESSAGE)?;
        info!(
            server,
            valid = scheme.verify_share(&params, MESSAGE, &partial, &keys),
            "partial signature"
        );
        shares.push(partial);
    }

    // Combine and verify with the unmodified verifier.
    let signature = scheme.reconstruct(&shares, &keys)?;
    info!(
        valid = scheme.verify(&params, IDENTITY, MESSAGE, &signature),
        "reconstructed signature"
    );

    // An undersized subset reconstructs something that fails to verify.
    let undersized = scheme.reconstruct(&shares[..THRESHOLD - 1], &keys)?;
    info!(
        valid = scheme.verify(&params, IDENTITY, MESSAGE, &undersized),
        "reconstruction from too few shares"
    );

    Ok(())
}
