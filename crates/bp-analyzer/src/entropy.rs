//! Shannon entropy over byte distributions.

/// Shannon entropy of `data` in bits per byte, in `[0.0, 8.0]`.
///
/// Empty input is defined as zero entropy rather than a division by zero.
/// A payload of one repeated byte scores 0.0; a uniform distribution over
/// all 256 byte values scores exactly 8.0.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut counts = [0u64; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }

    let len = data.len() as f64;
    let mut entropy = 0.0;
    for &count in &counts {
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * p.log2();
        }
    }

    // Float accumulation can wander a hair past the theoretical bound.
    entropy.clamp(0.0, 8.0)
}
