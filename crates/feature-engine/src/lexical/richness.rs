//! Type/Token Richness Measures
//!
//! Vocabulary-size transforms over N (tokens) and V (types). All logarithms
//! are base 10. Each measure is 0 wherever its denominator or logarithm
//! argument would be degenerate.

use super::profile::{ratio, TokenProfile};

/// Exponent applied to V in Brunet's W
pub const BRUNET_EXPONENT: f64 = -0.172;

/// Type/token measures for one document
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RichnessMeasures {
    pub type_token_ratio: f64,
    pub mean_word_frequency: f64,
    pub guiraud_r: f64,
    pub herdan_c: f64,
    pub rupet_k: f64,
    pub maas_a: f64,
    pub dugast_u: f64,
    pub lukjanenkov_neistoj: f64,
    pub brunet_w: f64,
}

impl RichnessMeasures {
    /// Compute every measure from the profile's N and V
    pub fn compute(profile: &TokenProfile) -> Self {
        let (n, v) = (profile.n(), profile.v());
        Self {
            type_token_ratio: ratio(v, n),
            mean_word_frequency: ratio(n, v),
            guiraud_r: guiraud_r(n, v),
            herdan_c: herdan_c(n, v),
            rupet_k: rupet_k(n, v),
            maas_a: maas_a(n, v),
            dugast_u: dugast_u(n, v),
            lukjanenkov_neistoj: lukjanenkov_neistoj(n, v),
            brunet_w: brunet_w(n, v),
        }
    }

    /// Feature names paired with values, in emission order
    pub fn named(&self) -> [(&'static str, f64); 9] {
        [
            ("TypeTokenRatio", self.type_token_ratio),
            ("MeanWordFrequency", self.mean_word_frequency),
            ("GuiraudR", self.guiraud_r),
            ("HerdanC", self.herdan_c),
            ("RupetK", self.rupet_k),
            ("MaasA", self.maas_a),
            ("DugastU", self.dugast_u),
            ("LukjanenkovNeistoj", self.lukjanenkov_neistoj),
            ("BrunetW", self.brunet_w),
        ]
    }
}

/// V / sqrt(N)
pub fn guiraud_r(n: usize, v: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    v as f64 / (n as f64).sqrt()
}

/// log V / log N
pub fn herdan_c(n: usize, v: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    (v as f64).log10() / (n as f64).log10()
}

/// log V / log(log N)
///
/// N = 10 makes log(log N) zero and is excluded explicitly.
pub fn rupet_k(n: usize, v: usize) -> f64 {
    if n <= 1 || v <= 1 || n == 10 {
        return 0.0;
    }
    (v as f64).log10() / (n as f64).log10().log10()
}

/// (log N - log V) / (log N)^2
pub fn maas_a(n: usize, v: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let log_n = (n as f64).log10();
    (log_n - (v as f64).log10()) / (log_n * log_n)
}

/// (log N)^2 / (log N - log V)
pub fn dugast_u(n: usize, v: usize) -> f64 {
    if n <= 1 || v <= 1 || n == v {
        return 0.0;
    }
    let log_n = (n as f64).log10();
    (log_n * log_n) / (log_n - (v as f64).log10())
}

/// (1 - V^2) / (V^2 log N)
pub fn lukjanenkov_neistoj(n: usize, v: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let v2 = (v as f64).powi(2);
    (1.0 - v2) / (v2 * (n as f64).log10())
}

/// N ^ (V ^ -0.172), unguarded
pub fn brunet_w(n: usize, v: usize) -> f64 {
    (n as f64).powf((v as f64).powf(BRUNET_EXPONENT))
}
