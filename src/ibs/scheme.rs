use core::marker::PhantomData;

use rand_core::RngCore;
use tracing::instrument;

use crate::{
    Authority, CurvePoint, Error, FieldElement, IdentityBasedSignature, MasterKey, PairingBackend,
    PrivateKey, PublicParameters, SchemeConfig, Signature,
};

/// The base single-party scheme.
///
/// Stateless; every operation reads the public parameters and key
/// material it is given and returns its result explicitly. The
/// verification equation it maintains is
///
/// ```text
/// e(σ1, g) == e(g2, g1) · e(IdMult(id), σ2) · e(MsgMult(m), σ3)
/// ```
///
/// evaluated in the target group.
#[derive(Debug)]
pub struct WatersScheme<B: PairingBackend> {
    _phantom: PhantomData<B>,
}

impl<B: PairingBackend> WatersScheme<B> {
    /// Creates a new scheme instance.
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<B: PairingBackend> Default for WatersScheme<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: PairingBackend> IdentityBasedSignature<B> for WatersScheme<B> {
    #[instrument(level = "info", skip_all, fields(
        identity_bits = config.identity_bits,
        message_bits = config.message_bits,
    ))]
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
        config.validate()?;

        let alpha = B::Scalar::random(rng);
        // Every non-identity element of a prime-order group generates
        // it, so uniform sampling yields generators.
        let g = B::G2::random(rng);
        let g2 = B::G1::random(rng);
        let g1 = g.mul_scalar(&alpha);
        let secret = g2.mul_scalar(&alpha);

        let params = PublicParameters {
            g,
            g1,
            g2,
            u_prime: authority.random_element(rng),
            m_prime: authority.random_element(rng),
            u_vec: authority.random_vector(rng, config.identity_bits),
            m_vec: authority.random_vector(rng, config.message_bits),
        };
        Ok((params, MasterKey { alpha, secret }))
    }

    #[instrument(level = "debug", skip_all, fields(identity = identity))]
    fn extract<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        params: &PublicParameters<B>,
        master: &MasterKey<B>,
        identity: &str,
    ) -> Result<PrivateKey<B>, Error> {
        let id_mult = params.identity_multiplier(identity)?;
        let r_u = B::Scalar::random(rng);
        Ok(PrivateKey {
            a: master.secret.add(&id_mult.mul_scalar(&r_u)),
            b: params.g.mul_scalar(&r_u),
            r_u,
        })
    }

    #[instrument(level = "debug", skip_all)]
    fn sign<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        params: &PublicParameters<B>,
        key: &PrivateKey<B>,
        message: &str,
    ) -> Result<Signature<B>, Error> {
        let msg_mult = params.message_multiplier(message)?;
        let r_m = B::Scalar::random(rng);
        Ok(Signature {
            sigma1: key.a.add(&msg_mult.mul_scalar(&r_m)),
            sigma2: key.b,
            sigma3: params.g.mul_scalar(&r_m),
        })
    }

    fn verify(
        &self,
        params: &PublicParameters<B>,
        identity: &str,
        message: &str,
        signature: &Signature<B>,
    ) -> bool {
        let id_mult = match params.identity_multiplier(identity) {
            Ok(element) => element,
            Err(_) => return false,
        };
        let msg_mult = match params.message_multiplier(message) {
            Ok(element) => element,
            Err(_) => return false,
        };

        let left = B::pairing(&signature.sigma1, &params.g);
        let right = match B::multi_pairing(
            &[params.g2, id_mult, msg_mult],
            &[params.g1, signature.sigma2, signature.sigma3],
        ) {
            Ok(product) => product,
            Err(_) => return false,
        };
        left == right
    }
}
