use blake3::Hasher;
use glam::Quat;
use crate::types::Vec3;

pub struct StepHasher(Hasher);

impl StepHasher {
    pub fn new() -> Self { StepHasher(Hasher::new()) }
    pub fn update_bytes(&mut self, bytes: &[u8]) { self.0.update(bytes); }
    pub fn finalize(self) -> [u8; 32] { *self.0.finalize().as_bytes() }
}

impl Default for StepHasher {
    fn default() -> Self { Self::new() }
}

#[inline]
pub fn hash_vec3(h: &mut StepHasher, v: &Vec3) {
    for c in [v.x, v.y, v.z] { h.update_bytes(&c.to_le_bytes()); }
}

#[inline]
pub fn hash_quat(h: &mut StepHasher, q: &Quat) {
    for c in [q.x, q.y, q.z, q.w] { h.update_bytes(&c.to_le_bytes()); }
}

/// Hex-encode a 32-byte hash for logs and trace output.
pub fn hex32(x: [u8; 32]) -> String {
    let mut s = String::with_capacity(64);
    for b in &x {
        use std::fmt::Write;
        let _ = write!(s, "{:02x}", b);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn equal_state_hashes_equal() {
        let digest = |v: Vec3, q: Quat| {
            let mut h = StepHasher::new();
            hash_vec3(&mut h, &v);
            hash_quat(&mut h, &q);
            h.finalize()
        };
        let a = digest(Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY);
        let b = digest(Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY);
        let c = digest(Vec3::new(1.0, 0.0, 0.0), Quat::IDENTITY);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test] fn hex_is_64_chars() {
        let h = StepHasher::new().finalize();
        let s = hex32(h);
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
