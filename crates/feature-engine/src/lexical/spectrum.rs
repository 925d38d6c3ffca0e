//! Frequency-Spectrum Measures
//!
//! Statistics over V(i, N), the number of types occurring exactly `i` times.

use super::profile::{ratio, TokenProfile};

/// Spectrum-based measures for one document
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpectrumMeasures {
    pub sichel_s: f64,
    pub michea_m: f64,
    pub honore_h: f64,
    pub entropy: f64,
    pub yule_k: f64,
    pub simpson_d: f64,
    pub herdan_v: f64,
}

impl SpectrumMeasures {
    /// Compute every measure from the profile's spectrum
    pub fn compute(profile: &TokenProfile) -> Self {
        let (n, v) = (profile.n(), profile.v());
        let hapax = profile.types_with_frequency(1);
        let dis = profile.types_with_frequency(2);

        Self {
            sichel_s: ratio(dis, v),
            michea_m: ratio(v, dis),
            honore_h: honore_h(n, v, hapax),
            entropy: entropy(profile),
            yule_k: yule_k(profile),
            simpson_d: simpson_d(profile),
            herdan_v: herdan_v(profile),
        }
    }

    /// Feature names paired with values, in emission order
    pub fn named(&self) -> [(&'static str, f64); 7] {
        [
            ("SichelS", self.sichel_s),
            ("MicheaM", self.michea_m),
            ("HonoreH", self.honore_h),
            ("Entropy", self.entropy),
            ("YuleK", self.yule_k),
            ("SimpsonD", self.simpson_d),
            ("HerdanV", self.herdan_v),
        ]
    }
}

/// 100 log N / (1 - V1/V)
///
/// Unbounded when every type is a hapax; only N > 1 and V > 1 are checked.
pub fn honore_h(n: usize, v: usize, hapax: usize) -> f64 {
    if n <= 1 || v <= 1 {
        return 0.0;
    }
    100.0 * (n as f64).log10() / (1.0 - hapax as f64 / v as f64)
}

/// Good's entropy with s = t = 1: sum V(i) * -log(i/N) * (i/N)
pub fn entropy(profile: &TokenProfile) -> f64 {
    let n = profile.n() as f64;
    if profile.is_empty() {
        return 0.0;
    }
    profile
        .spectrum
        .iter()
        .map(|(&i, &types)| {
            let p = i as f64 / n;
            types as f64 * -p.log10() * p
        })
        .sum()
}

/// -1/N + sum V(i) * (i/N)^2
pub fn yule_k(profile: &TokenProfile) -> f64 {
    if profile.is_empty() {
        return 0.0;
    }
    let n = profile.n() as f64;
    -1.0 / n + sum_squared_shares(profile)
}

/// sum V(i) * (i/N) * ((i-1)/(N-1))
pub fn simpson_d(profile: &TokenProfile) -> f64 {
    let n = profile.n();
    if n <= 1 {
        return 0.0;
    }
    let (n, n1) = (n as f64, (n - 1) as f64);
    profile
        .spectrum
        .iter()
        .map(|(&i, &types)| types as f64 * (i as f64 / n) * ((i - 1) as f64 / n1))
        .sum()
}

/// sqrt(sum V(i) * (i/N)^2 - 1/V)
///
/// The radicand is formed in integers as (V * sum V(i) i^2 - N^2) / (V N^2),
/// which is never negative.
pub fn herdan_v(profile: &TokenProfile) -> f64 {
    let (n, v) = (profile.n() as u128, profile.v() as u128);
    if n == 0 || v == 0 {
        return 0.0;
    }
    let sum_sq: u128 = profile
        .spectrum
        .iter()
        .map(|(&i, &types)| types as u128 * (i as u128).pow(2))
        .sum();
    let numer = (v * sum_sq).saturating_sub(n * n);
    (numer as f64 / (v * n * n) as f64).sqrt()
}

fn sum_squared_shares(profile: &TokenProfile) -> f64 {
    let n = profile.n() as f64;
    profile
        .spectrum
        .iter()
        .map(|(&i, &types)| types as f64 * (i as f64 / n).powi(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn profile(text: &str) -> TokenProfile {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        TokenProfile::from_tokens(&tokens)
    }

    #[test]
    fn test_sichel_and_michea() {
        // a=2, b=1: V = 2, V(2) = 1
        let m = SpectrumMeasures::compute(&profile("a a b"));
        assert!((m.sichel_s - 0.5).abs() < EPS);
        assert!((m.michea_m - 2.0).abs() < EPS);
    }

    #[test]
    fn test_michea_without_dislegomena_is_zero() {
        let m = SpectrumMeasures::compute(&profile("a b c"));
        assert_eq!(m.sichel_s, 0.0);
        assert_eq!(m.michea_m, 0.0);
    }

    #[test]
    fn test_honore_h() {
        let expected = 100.0 * 3f64.log10() / (1.0 - 0.5);
        assert!((honore_h(3, 2, 1) - expected).abs() < EPS);
        assert_eq!(honore_h(1, 1, 1), 0.0);
        assert_eq!(honore_h(4, 1, 0), 0.0);
    }

    #[test]
    fn test_honore_h_all_hapax_is_unbounded() {
        assert!(honore_h(3, 3, 3).is_infinite());
    }

    #[test]
    fn test_entropy() {
        let p = profile("a a b");
        let expected =
            -(2.0f64 / 3.0).log10() * (2.0 / 3.0) - (1.0f64 / 3.0).log10() * (1.0 / 3.0);
        assert!((entropy(&p) - expected).abs() < EPS);
    }

    #[test]
    fn test_entropy_single_type_is_zero() {
        assert!(entropy(&profile("x x x x")).abs() < EPS);
    }

    #[test]
    fn test_yule_k() {
        // -1/3 + (2/3)^2 + (1/3)^2 = 2/9
        assert!((yule_k(&profile("a a b")) - 2.0 / 9.0).abs() < EPS);
        assert_eq!(yule_k(&profile("")), 0.0);
    }

    #[test]
    fn test_simpson_d() {
        // (2/3) * (1/2) + (1/3) * 0 = 1/3
        assert!((simpson_d(&profile("a a b")) - 1.0 / 3.0).abs() < EPS);
        assert_eq!(simpson_d(&profile("solo")), 0.0);
    }

    #[test]
    fn test_herdan_v() {
        // sqrt(5/9 - 1/2) = sqrt(1/18)
        assert!((herdan_v(&profile("a a b")) - (1.0f64 / 18.0).sqrt()).abs() < EPS);
        assert_eq!(herdan_v(&profile("")), 0.0);
    }

    #[test]
    fn test_herdan_v_all_hapax_is_exactly_zero() {
        assert_eq!(herdan_v(&profile("one two three four five six seven")), 0.0);
    }
}
