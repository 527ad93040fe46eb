//! Multi-level discrete wavelet decomposition with Daubechies filters.
//!
//! Each level splits the working buffer into an approximation and a
//! detail band using half-sample symmetric extension at the borders, then
//! recurses on the approximation. The decomposition depth is the largest
//! level at which the filter still fits the buffer. The flattened output
//! is the deepest approximation followed by the detail bands from
//! coarsest to finest.

use std::str::FromStr;

use sygnal_core::{Error, Metadata, Result, Signal};

/// Daubechies wavelet family member, named by tap count / 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wavelet {
    /// 8-tap Daubechies filter.
    Db4,
    /// 12-tap Daubechies filter.
    Db6,
    /// 16-tap Daubechies filter.
    Db8,
}

// Decomposition lowpass taps. The highpass taps follow from the
// quadrature mirror relation in `decomposition_highpass`.
const DB4_LO: [f64; 8] = [
    -0.010_597_401_784_997_278,
    0.032_883_011_666_982_945,
    0.030_841_381_835_986_965,
    -0.187_034_811_718_881_14,
    -0.027_983_769_416_983_85,
    0.630_880_767_929_590_4,
    0.714_846_570_552_541_5,
    0.230_377_813_308_855_23,
];

const DB6_LO: [f64; 12] = [
    -0.001_077_301_084_995_58,
    0.004_777_257_511_010_651,
    0.000_553_842_200_993_801_6,
    -0.031_582_039_318_031_156,
    0.027_522_865_530_016_29,
    0.097_501_605_587_079_36,
    -0.129_766_867_567_095_63,
    -0.226_264_693_965_169_13,
    0.315_250_351_709_243_2,
    0.751_133_908_021_577_5,
    0.494_623_890_398_385_4,
    0.111_540_743_350_080_17,
];

const DB8_LO: [f64; 16] = [
    -0.000_117_476_784_002_281_92,
    0.000_675_449_405_998_556_8,
    -0.000_391_740_372_995_977_1,
    -0.004_870_352_993_010_66,
    0.008_746_094_047_015_655,
    0.013_981_027_917_015_516,
    -0.044_088_253_931_064_72,
    -0.017_369_301_002_022_11,
    0.128_747_426_620_186,
    0.000_472_484_573_997_972_54,
    -0.284_015_542_962_428_1,
    -0.015_829_105_256_023_893,
    0.585_354_683_654_869_1,
    0.675_630_736_298_012_8,
    0.312_871_590_914_465_9,
    0.054_415_842_243_081_61,
];

impl Wavelet {
    /// Canonical short name, e.g. `db4`.
    pub fn name(self) -> &'static str {
        match self {
            Wavelet::Db4 => "db4",
            Wavelet::Db6 => "db6",
            Wavelet::Db8 => "db8",
        }
    }

    fn decomposition_lowpass(self) -> &'static [f64] {
        match self {
            Wavelet::Db4 => &DB4_LO,
            Wavelet::Db6 => &DB6_LO,
            Wavelet::Db8 => &DB8_LO,
        }
    }

    fn decomposition_highpass(self) -> Vec<f64> {
        let lo = self.decomposition_lowpass();
        let len = lo.len();
        (0..len)
            .map(|k| {
                let sign = if k % 2 == 0 { -1.0 } else { 1.0 };
                sign * lo[len - 1 - k]
            })
            .collect()
    }

    /// Deepest decomposition level where the filter still fits `n` samples.
    pub fn max_level(self, n: usize) -> usize {
        let span = self.decomposition_lowpass().len() - 1;
        let mut level = 0;
        while span << (level + 1) <= n {
            level += 1;
        }
        level
    }
}

impl FromStr for Wavelet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "db4" => Ok(Wavelet::Db4),
            "db6" => Ok(Wavelet::Db6),
            "db8" => Ok(Wavelet::Db8),
            other => Err(Error::UnsupportedOperation(format!(
                "unknown wavelet {other:?}, expected db4, db6 or db8"
            ))),
        }
    }
}

/// Reflect an index into `[0, n)` with half-sample symmetry.
fn sym_index(mut i: isize, n: usize) -> usize {
    let n = n as isize;
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= n {
            i = 2 * n - 1 - i;
        } else {
            return i as usize;
        }
    }
}

/// One analysis pass: convolve with the extended input and keep odd taps.
fn dwt_single(input: &[f64], filter: &[f64]) -> Vec<f64> {
    let n = input.len();
    let out_len = (n + filter.len() - 1) / 2;
    (0..out_len)
        .map(|k| {
            filter
                .iter()
                .enumerate()
                .map(|(j, &h)| h * input[sym_index(2 * k as isize + 1 - j as isize, n)])
                .sum()
        })
        .collect()
}

/// Full decomposition: `[approx_L, detail_L, ..., detail_1]`.
///
/// A buffer too short for even one level comes back as a single band.
pub fn wavedec(wavelet: Wavelet, samples: &[f64]) -> Vec<Vec<f64>> {
    let levels = wavelet.max_level(samples.len());
    if levels == 0 {
        return vec![samples.to_vec()];
    }

    let lowpass = wavelet.decomposition_lowpass();
    let highpass = wavelet.decomposition_highpass();

    let mut details = Vec::with_capacity(levels);
    let mut approx = samples.to_vec();
    for _ in 0..levels {
        let detail = dwt_single(&approx, &highpass);
        approx = dwt_single(&approx, lowpass);
        details.push(detail);
    }

    let mut bands = Vec::with_capacity(levels + 1);
    bands.push(approx);
    bands.extend(details.into_iter().rev());
    bands
}

/// Decompose a real signal and flatten the bands into one buffer.
///
/// The output metadata keeps the input's timing, counts the flattened
/// samples and records the wavelet name under the `wavelet` key.
pub fn wavelet_transform(
    wavelet: Wavelet,
    signal: &Signal,
    metadata: &Metadata,
) -> Result<(Signal, Metadata)> {
    let Signal::Real(samples) = signal else {
        return Err(Error::UnsupportedOperation(
            "wavelet decomposition requires a real signal".into(),
        ));
    };

    let bands = wavedec(wavelet, samples);
    let flat: Vec<f64> = bands.into_iter().flatten().collect();
    let out_meta = Metadata::new(metadata.start_time, metadata.sampling_freq, flat.len())
        .tagged("wavelet", wavelet.name());
    Ok((Signal::Real(flat), out_meta))
}
