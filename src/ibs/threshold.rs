use rand_core::RngCore;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::instrument;

use crate::{
    lagrange_coefficient_at_zero, Authority, CurvePoint, DistributedKeys, Error, FieldElement,
    IdentityBasedSignature, KeyShare, MasterKey, PairingBackend, Polynomial, PrivateKey,
    PublicParameters, SchemeConfig, Signature, SignatureShare, TargetGroup, ThresholdConfig,
    ThresholdSignature, WatersScheme,
};

/// The `(t, n)` threshold scheme.
///
/// Composes the base [`WatersScheme`]; the base operations delegate, so
/// a single instance covers the whole lifecycle from setup to threshold
/// reconstruction. The threshold operations keep all of their state in
/// the values they exchange - the hidden polynomial secret is returned
/// to the dealer, never kept.
#[derive(Debug)]
pub struct ThresholdScheme<B: PairingBackend> {
    base: WatersScheme<B>,
}

impl<B: PairingBackend> Default for ThresholdScheme<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: PairingBackend> ThresholdScheme<B> {
    /// Creates a new threshold scheme instance.
    pub fn new() -> Self {
        Self {
            base: WatersScheme::new(),
        }
    }

    /// The underlying single-party scheme.
    pub fn base(&self) -> &WatersScheme<B> {
        &self.base
    }
}

impl<B: PairingBackend> IdentityBasedSignature<B> for ThresholdScheme<B> {
    fn setup<R, A>(
        &self,
        rng: &mut R,
        authority: &A,
        config: &SchemeConfig,
    ) -> Result<(PublicParameters<B>, MasterKey<B>), Error>
    where
        R: RngCore + ?Sized,
        A: Authority<B>,
    {
        self.base.setup(rng, authority, config)
    }

    fn extract<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        params: &PublicParameters<B>,
        master: &MasterKey<B>,
        identity: &str,
    ) -> Result<PrivateKey<B>, Error> {
        self.base.extract(rng, params, master, identity)
    }

    fn sign<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        params: &PublicParameters<B>,
        key: &PrivateKey<B>,
        message: &str,
    ) -> Result<Signature<B>, Error> {
        self.base.sign(rng, params, key, message)
    }

    fn verify(
        &self,
        params: &PublicParameters<B>,
        identity: &str,
        message: &str,
        signature: &Signature<B>,
    ) -> bool {
        self.base.verify(params, identity, message, signature)
    }
}

impl<B: PairingBackend> ThresholdSignature<B> for ThresholdScheme<B> {
    #[instrument(level = "info", skip_all, fields(
        servers = config.servers,
        threshold = config.threshold,
    ))]
    fn distribute_key<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        params: &PublicParameters<B>,
        key: &PrivateKey<B>,
        identity: &str,
        config: &ThresholdConfig,
    ) -> Result<(DistributedKeys<B>, B::Scalar), Error> {
        config.validate()?;
        let id_mult = params.identity_multiplier(identity)?;

        // f(x) = a_0 + a_1 x + ... + a_{t-1} x^{t-1}, every coefficient
        // fresh and uniform. The hidden secret r_u' = a_0 is unrelated
        // to the key's own r_u; y0 carries the offset that re-aligns
        // the shared exponent with the real key at reconstruction.
        let polynomial = Polynomial::<B::Scalar>::random(config.threshold, rng)?;
        let r_up = polynomial.constant_term();

        let y0 = key.a.sub(&id_mult.mul_scalar(&r_up));
        let y1 = key.b;

        let share_base = B::pairing(&id_mult, &params.g);
        let per_server: Vec<(KeyShare<B>, B::Target)> = (1..=config.servers as u64)
            .into_par_iter()
            .map(|index| {
                let f_k = polynomial.evaluate(&B::Scalar::from_u64(index));
                let share = KeyShare {
                    index: index as u32,
                    scalar: f_k,
                };
                (share, share_base.mul_scalar(&f_k))
            })
            .collect();

        let mut shares = Vec::with_capacity(config.servers);
        let mut verification_keys = Vec::with_capacity(config.servers);
        for (share, verification_key) in per_server {
            shares.push(share);
            verification_keys.push(verification_key);
        }

        Ok((
            DistributedKeys {
                y0,
                y1,
                shares,
                verification_keys,
            },
            r_up,
        ))
    }

    #[instrument(level = "trace", skip_all, fields(index = share.index))]
    fn partial_sign<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        params: &PublicParameters<B>,
        share: &KeyShare<B>,
        identity: &str,
        message: &str,
    ) -> Result<SignatureShare<B>, Error> {
        let id_mult = params.identity_multiplier(identity)?;
        let msg_mult = params.message_multiplier(message)?;
        let r_k = B::Scalar::random(rng);
        Ok(SignatureShare {
            index: share.index,
            sigma1: id_mult
                .mul_scalar(&share.scalar)
                .add(&msg_mult.mul_scalar(&r_k)),
            sigma2: params.g.mul_scalar(&r_k),
            r_k,
        })
    }

    fn verify_share(
        &self,
        params: &PublicParameters<B>,
        message: &str,
        share: &SignatureShare<B>,
        keys: &DistributedKeys<B>,
    ) -> bool {
        let msg_mult = match params.message_multiplier(message) {
            Ok(element) => element,
            Err(_) => return false,
        };
        let verification_key = match keys.verification_key(share.index) {
            Some(key) => key,
            None => return false,
        };

        // e(σ1_k, g) == e(IdMult, g)^{f(k)} · e(MsgMult, σ2_k)
        let left = B::pairing(&share.sigma1, &params.g);
        let right = verification_key.combine(&B::pairing(&msg_mult, &share.sigma2));
        left == right
    }

    #[instrument(level = "info", skip_all, fields(shares = shares.len()))]
    fn reconstruct(
        &self,
        shares: &[SignatureShare<B>],
        keys: &DistributedKeys<B>,
    ) -> Result<Signature<B>, Error> {
        let mut indices = Vec::with_capacity(shares.len());
        for share in shares {
            if share.index == 0 {
                return Err(Error::InvalidArgument(
                    "share index 0 is reserved for the hidden secret".into(),
                ));
            }
            if indices.contains(&share.index) {
                return Err(Error::InvalidArgument(format!(
                    "duplicate share index {}",
                    share.index
                )));
            }
            indices.push(share.index);
        }

        // No minimum-share check: an undersized index set interpolates
        // the wrong exponent and the result fails verification.
        let mut sigma1 = keys.y0;
        let mut sigma3 = B::G2::identity();
        for share in shares {
            let lambda = lagrange_coefficient_at_zero::<B::Scalar>(&indices, share.index)
                .map_err(Error::Backend)?;
            sigma1 = sigma1.add(&share.sigma1.mul_scalar(&lambda));
            sigma3 = sigma3.add(&share.sigma2.mul_scalar(&lambda));
        }

        Ok(Signature {
            sigma1,
            sigma2: keys.y1,
            sigma3,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{Fr, PairingEngine, UniformAuthority};

    const IDENTITY: &str = "00101";
    const MESSAGE: &str = "1010011001";
    const SERVERS: usize = 10;
    const THRESHOLD: usize = 3;

    struct Fixture {
        scheme: ThresholdScheme<PairingEngine>,
        rng: StdRng,
        params: PublicParameters<PairingEngine>,
        master: MasterKey<PairingEngine>,
        key: PrivateKey<PairingEngine>,
        keys: DistributedKeys<PairingEngine>,
        r_up: Fr,
    }

    fn fixture(seed: u64) -> Fixture {
        let scheme = ThresholdScheme::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let config = SchemeConfig::new(IDENTITY.len(), MESSAGE.len()).unwrap();
        let (params, master) = scheme
            .setup(&mut rng, &UniformAuthority, &config)
            .unwrap();
        let key = scheme.extract(&mut rng, &params, &master, IDENTITY).unwrap();
        let threshold_config = ThresholdConfig::new(SERVERS, THRESHOLD).unwrap();
        let (keys, r_up) = scheme
            .distribute_key(&mut rng, &params, &key, IDENTITY, &threshold_config)
            .unwrap();
        Fixture {
            scheme,
            rng,
            params,
            master,
            key,
            keys,
            r_up,
        }
    }

    fn collect_shares(
        fixture: &mut Fixture,
        indices: &[u32],
        message: &str,
    ) -> Vec<SignatureShare<PairingEngine>> {
        indices
            .iter()
            .map(|&index| {
                let share = fixture.keys.share(index).unwrap().clone();
                fixture
                    .scheme
                    .partial_sign(&mut fixture.rng, &fixture.params, &share, IDENTITY, message)
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn distribution_realigns_with_the_private_key() {
        let fixture = fixture(21);
        let id_mult = fixture.params.identity_multiplier(IDENTITY).unwrap();

        // y0 · IdMult^{r_u'} recovers the private key's first component.
        assert_eq!(
            fixture.keys.y0.add(&id_mult.mul_scalar(&fixture.r_up)),
            fixture.key.a,
        );
        assert_eq!(fixture.keys.y1, fixture.key.b);

        // The division form equals masterSecret · IdMult^{r_u - r_u'}.
        let offset = fixture.key.r_u - fixture.r_up;
        assert_eq!(
            fixture.keys.y0,
            fixture.master.secret.add(&id_mult.mul_scalar(&offset)),
        );

        assert_eq!(fixture.keys.servers(), SERVERS);
        assert_eq!(fixture.keys.verification_keys.len(), SERVERS);
    }

    #[test]
    fn every_share_passes_verification() {
        let mut fixture = fixture(22);
        let all: Vec<u32> = (1..=SERVERS as u32).collect();
        let shares = collect_shares(&mut fixture, &all, MESSAGE);
        for share in &shares {
            assert!(fixture
                .scheme
                .verify_share(&fixture.params, MESSAGE, share, &fixture.keys));
        }
    }

    #[test]
    fn share_over_wrong_message_fails_verification() {
        let mut fixture = fixture(23);
        let shares = collect_shares(&mut fixture, &[4], MESSAGE);
        assert!(!fixture.scheme.verify_share(
            &fixture.params,
            "0000000000",
            &shares[0],
            &fixture.keys,
        ));

        let mut orphan = shares[0].clone();
        orphan.index = SERVERS as u32 + 1;
        assert!(!fixture
            .scheme
            .verify_share(&fixture.params, MESSAGE, &orphan, &fixture.keys));
    }

    #[test]
    fn any_qualifying_subset_reconstructs() {
        let mut fixture = fixture(24);
        for subset in [
            vec![1, 2, 3],
            vec![1, 7, 2],
            vec![4, 8, 10],
            vec![1, 2, 3, 4, 5],
        ] {
            let shares = collect_shares(&mut fixture, &subset, MESSAGE);
            let signature = fixture.scheme.reconstruct(&shares, &fixture.keys).unwrap();
            assert!(
                fixture
                    .scheme
                    .verify(&fixture.params, IDENTITY, MESSAGE, &signature),
                "subset {subset:?} must reconstruct a valid signature",
            );
        }
    }

    #[test]
    fn undersized_subsets_fail_verification() {
        let mut fixture = fixture(25);
        for subset in [vec![1, 2], vec![7]] {
            let shares = collect_shares(&mut fixture, &subset, MESSAGE);
            let signature = fixture.scheme.reconstruct(&shares, &fixture.keys).unwrap();
            assert!(
                !fixture
                    .scheme
                    .verify(&fixture.params, IDENTITY, MESSAGE, &signature),
                "subset {subset:?} is below the threshold",
            );
        }
    }

    #[test]
    fn shares_are_reusable_across_messages() {
        let mut fixture = fixture(26);
        let other = "0101010101";

        let shares = collect_shares(&mut fixture, &[2, 5, 9], MESSAGE);
        let signature = fixture.scheme.reconstruct(&shares, &fixture.keys).unwrap();
        assert!(fixture
            .scheme
            .verify(&fixture.params, IDENTITY, MESSAGE, &signature));

        let shares = collect_shares(&mut fixture, &[2, 5, 9], other);
        let signature = fixture.scheme.reconstruct(&shares, &fixture.keys).unwrap();
        assert!(fixture
            .scheme
            .verify(&fixture.params, IDENTITY, other, &signature));
        assert!(!fixture
            .scheme
            .verify(&fixture.params, IDENTITY, MESSAGE, &signature));
    }

    #[test]
    fn malformed_share_sets_are_rejected() {
        let mut fixture = fixture(27);
        let shares = collect_shares(&mut fixture, &[1, 2, 3], MESSAGE);

        let mut duplicated = shares.clone();
        duplicated[2] = shares[0].clone();
        assert!(matches!(
            fixture.scheme.reconstruct(&duplicated, &fixture.keys),
            Err(Error::InvalidArgument(_)),
        ));

        let mut zeroed = shares;
        zeroed[0].index = 0;
        assert!(matches!(
            fixture.scheme.reconstruct(&zeroed, &fixture.keys),
            Err(Error::InvalidArgument(_)),
        ));
    }
}
