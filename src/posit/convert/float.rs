use super::*;

/// The layout of an IEEE 754 binary floating point format: the number of explicit mantissa bits
/// and the number of exponent bits. The sign is the bit above those.
#[derive(Clone, Copy)]
struct Ieee {
  mantissa_bits: u32,
  exponent_bits: u32,
}

impl Ieee {
  const F32: Self = Self { mantissa_bits: f32::MANTISSA_DIGITS - 1, exponent_bits: 8 };
  const F64: Self = Self { mantissa_bits: f64::MANTISSA_DIGITS - 1, exponent_bits: 11 };

  /// The exponent bias.
  const fn bias(self) -> i32 {
    (1 << (self.exponent_bits - 1)) - 1
  }

  /// The largest finite number, as raw bits (without sign).
  const fn max_finite(self) -> u64 {
    let exponent = (1u64 << self.exponent_bits) - 2;
    (exponent << self.mantissa_bits) | ((1 << self.mantissa_bits) - 1)
  }

  /// Extract the sign, exponent, and mantissa fields of a float with raw bits `bits`, which must
  /// be finite and nonzero, and represent them as a [`Decoded`]. This is always exact.
  fn decode(self, bits: u64) -> Decoded {
    let sign = (bits >> (self.mantissa_bits + self.exponent_bits)) & 1 != 0;
    let biased = ((bits >> self.mantissa_bits) & ((1 << self.exponent_bits) - 1)) as i32;
    let mantissa = bits & ((1 << self.mantissa_bits) - 1);
    debug_assert!(biased != 0 || mantissa != 0, "Should not pass 0 to Ieee::decode");

    if biased != 0 {
      // Normal: the hidden bit is implicit, and has weight 2^(biased - bias).
      let frac = (mantissa | 1 << self.mantissa_bits) as u128;
      Decoded { sign, scale: biased - self.bias(), frac }
    } else {
      // Subnormal: there is no hidden bit, and the mantissa has weight 2^(1 - bias) × 0.mmmm….
      // The most significant 1 of the mantissa becomes our hidden bit.
      let leading = self.mantissa_bits + 1 - mantissa.most_significant_one_position();
      let scale = 1 - self.bias() - leading as i32;
      Decoded { sign, scale, frac: mantissa as u128 }
    }
  }

  /// Encode a [`Decoded`] into the raw bits of the nearest float, rounding to nearest, ties to
  /// even. Unlike with posits, magnitudes too small for even a subnormal round to 0; magnitudes
  /// too large for the format saturate to the largest finite float rather than to infinity.
  fn encode(self, x: Decoded) -> u64 {
    let sign_bit = u64::from(x.sign) << (self.mantissa_bits + self.exponent_bits);
    if x.scale > self.bias() { return sign_bit | self.max_finite() }

    // The weight of the lsb of the mantissa is `2^(scale - mantissa_bits)` for normals, but it
    // stops going down at the smallest normal scale `1 - bias`: below that, the number is
    // subnormal and loses bits from the top instead.
    let scale = x.scale.max(1 - self.bias());
    let lsb = scale - self.mantissa_bits as i32;

    // `frac` has an lsb of weight `2^(x.scale - frac_size)`; shift it so that its lsb has weight
    // `2^lsb`, rounding off what falls off the right.
    let shift = lsb - (x.scale - x.frac_size() as i32);
    let (kept, round, sticky) =
      if shift <= 0 {
        (x.frac << (-shift) as u32, false, false)
      } else if shift >= 128 {
        (0, false, true)
      } else {
        let shift = shift as u32;
        let round = x.frac & (1 << (shift - 1)) != 0;
        let sticky = x.frac & ((1 << (shift - 1)) - 1) != 0;
        (x.frac >> shift, round, sticky)
      };
    let kept = kept + u128::from(round && (sticky || kept & 1 != 0));

    // For a normal, `kept` has the hidden bit at bit `mantissa_bits`, and adding it to the
    // biased exponent minus 1 (shifted into place) takes care of the hidden bit. If rounding
    // carried all the way up, the hidden bit is at `mantissa_bits + 1`, and the same addition
    // bumps the exponent. For a subnormal, the exponent field is 0 and `kept` is simply the
    // mantissa (and if it carried up to `2^mantissa_bits`, it became the smallest normal).
    let biased_minus_one = (scale + self.bias() - 1) as u64;
    let bits = (biased_minus_one << self.mantissa_bits) + kept as u64;
    sign_bit | bits.min(self.max_finite())
  }
}

macro_rules! make_impl {
  ($float:ty, $ieee:expr) => {
    impl<
      const N: u32,
      const ES: u32,
      Word: crate::Word,
    > RoundFrom<$float> for Posit<N, ES, Word> {
      #[doc = concat!("Convert an `", stringify!($float), "` into a `Posit`, rounding:")]
      ///
      /// - If the value is any infinity or any NaN, it converts to [NaR](Posit::NAR).
      /// - If the value is ±0, it converts to [0](Posit::ZERO).
      /// - Otherwise, the float value is rounded (if necessary).
      fn round_from(value: $float) -> Self {
        use core::num::FpCategory;
        match value.classify() {
          FpCategory::Nan | FpCategory::Infinite => Self::NAR,
          FpCategory::Zero => Self::ZERO,
          FpCategory::Normal | FpCategory::Subnormal => {
            $ieee.decode(value.to_bits() as u64).encode_round(false)
          }
        }
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Word: crate::Word,
    > RoundFrom<Posit<N, ES, Word>> for $float {
      #[doc = concat!("Convert a `Posit` into an `", stringify!($float), "`, rounding:")]
      ///
      /// - [NaR](Posit::NAR) converts to NaN, and [0](Posit::ZERO) to `+0.0`.
      /// - Otherwise, the value is rounded to nearest, ties to even. Values too large for the float
      ///   saturate to its largest finite value (with the right sign); values too small round
      ///   through the subnormals, and may round to ±0.
      fn round_from(value: Posit<N, ES, Word>) -> Self {
        match value.try_decode() {
          Err(special) => if special == Posit::ZERO { 0.0 } else { <$float>::NAN },
          Ok(decoded) => <$float>::from_bits($ieee.encode(decoded) as _),
        }
      }
    }
  }
}

make_impl!{f32, Ieee::F32}
make_impl!{f64, Ieee::F64}
