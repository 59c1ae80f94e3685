use digest::Digest;

/// Incremental hash computation.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

/// Adapts any `digest::Digest` to [`Hasher`].
#[derive(Default)]
pub struct DigestHasher<D: Digest + Send>(D);

impl<D: Digest + Send> DigestHasher<D> {
    pub fn new() -> Self { Self(D::new()) }
}

impl<D: Digest + Send> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) { Digest::update(&mut self.0, data); }

    fn finalize(self) -> Vec<u8> { self.0.finalize().to_vec() }
}

pub type Sha1Hasher = DigestHasher<sha1::Sha1>;

pub type Sha256Hasher = DigestHasher<sha2::Sha256>;
