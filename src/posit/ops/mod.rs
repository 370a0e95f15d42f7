use super::*;

/// Addition and subtraction (both use the same addition algorithm, and `a - b` is simply
/// `a + (-b)`).
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Helper macro for implementing a binary operator, and its assigning form, for every combination
/// of value and reference operands. All of them forward to the inherent kernel `Posit::$name`,
/// which takes both operands by value.
///
/// Usage: `mk_ops!{Add, add, AddAssign, add_assign, "Standard: \"**addition**\"."}`
macro_rules! mk_ops {
  ($trait:ident, $name:ident, $trait_assign:ident, $name_assign:ident, $doc:literal) => {
    $crate::posit::ops::mk_ops!{@op $trait, $name, $doc, Posit<N, ES, Word>, Posit<N, ES, Word>}
    $crate::posit::ops::mk_ops!{@op $trait, $name, $doc, Posit<N, ES, Word>, &Posit<N, ES, Word>}
    $crate::posit::ops::mk_ops!{@op $trait, $name, $doc, &Posit<N, ES, Word>, Posit<N, ES, Word>}
    $crate::posit::ops::mk_ops!{@op $trait, $name, $doc, &Posit<N, ES, Word>, &Posit<N, ES, Word>}
    $crate::posit::ops::mk_ops!{@assign $trait_assign, $name_assign, $name, $doc, Posit<N, ES, Word>}
    $crate::posit::ops::mk_ops!{@assign $trait_assign, $name_assign, $name, $doc, &Posit<N, ES, Word>}
  };
  (@op $trait:ident, $name:ident, $doc:literal, $lhs:ty, $rhs:ty) => {
    impl<const N: u32, const ES: u32, Word: crate::Word>
    core::ops::$trait<$rhs> for $lhs {
      type Output = Posit<N, ES, Word>;

      #[doc = $doc]
      #[inline]
      fn $name(self, rhs: $rhs) -> Self::Output {
        use core::borrow::Borrow;
        let x: &Posit<N, ES, Word> = <$lhs as Borrow<Posit<N, ES, Word>>>::borrow(&self);
        let y: &Posit<N, ES, Word> = <$rhs as Borrow<Posit<N, ES, Word>>>::borrow(&rhs);
        Posit::$name(*x, *y)
      }
    }
  };
  (@assign $trait_assign:ident, $name_assign:ident, $name:ident, $doc:literal, $rhs:ty) => {
    impl<const N: u32, const ES: u32, Word: crate::Word>
    core::ops::$trait_assign<$rhs> for Posit<N, ES, Word> {
      #[doc = $doc]
      #[inline]
      fn $name_assign(&mut self, rhs: $rhs) {
        use core::borrow::Borrow;
        let y: &Posit<N, ES, Word> = <$rhs as Borrow<Posit<N, ES, Word>>>::borrow(&rhs);
        *self = Posit::$name(*self, *y)
      }
    }
  };
}

pub(crate) use mk_ops;

/// Macro for instantiating the suite of tests for a binary operator of posits.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt) => {
    use crate::Posit;
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[test]
    fn operand_forms_agree() {
      let a = crate::p32::from_bits(0x4c80_1234);
      let b = crate::p32::from_bits(0xba00_0f00);
      let expected = a $op b;
      assert_eq!(&a $op b, expected);
      assert_eq!(a $op &b, expected);
      assert_eq!(&a $op &b, expected);
      let mut c = a;
      c $op_assign b;
      assert_eq!(c, expected);
      let mut c = a;
      c $op_assign &b;
      assert_eq!(c, expected);
    }

    /// Aux function: check that `a $op b` is rounded correctly.
    fn is_correct_rounded<const N: u32, const ES: u32, Word: crate::Word>(
      a: Posit<N, ES, Word>,
      b: Posit<N, ES, Word>,
    ) -> bool {
      let posit = a $op b;
      if let (Ok(a), Ok(b)) = (Rational::try_from(a), Rational::try_from(b)) {
        if stringify!($op) == "/" && b == Rational::from(0) {
          return posit == Posit::NAR
        }
        let exact = a $op b;
        crate::posit::rational::is_correct_rounded(exact, posit)
      } else {
        posit == Posit::NAR
      }
    }

    macro_rules! test_exhaustive {
      ($name:ident, $posit:ty) => {
        #[test]
        fn $name() {
          for a in <$posit>::cases_exhaustive_all() {
            for b in <$posit>::cases_exhaustive_all() {
              assert!(is_correct_rounded(a, b), "{:?} ⋅ {:?}", a, b)
            }
          }
        }
      };
    }

    macro_rules! test_proptest {
      ($name:ident, $posit:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in <$posit>::cases_proptest_all(),
            b in <$posit>::cases_proptest_all(),
          ) {
            assert!(is_correct_rounded(a, b), "{:?} ⋅ {:?}", a, b)
          }
        }
      };
    }

    #[test]
    fn nar_absorbs() {
      for p in Posit::<8, 0, u8>::cases_exhaustive_all() {
        assert_eq!(p $op Posit::NAR, Posit::NAR, "{p:?}");
        assert_eq!(Posit::NAR $op p, Posit::NAR, "{p:?}");
      }
    }

    test_exhaustive!{posit_10_0_exhaustive, Posit::<10, 0, u16>}
    test_exhaustive!{posit_10_1_exhaustive, Posit::<10, 1, u16>}
    test_exhaustive!{posit_10_2_exhaustive, Posit::<10, 2, u16>}
    test_exhaustive!{posit_10_3_exhaustive, Posit::<10, 3, u16>}

    test_exhaustive!{posit_8_0_exhaustive, Posit::<8, 0, u8>}
    test_exhaustive!{posit_9_1_wide_word_exhaustive, Posit::<9, 1, u64>}

    // Above ~10 bits = 2^20 operations, it's infeasible to test binary operations exhaustively,
    // especially when not in a release build (in that case, we maybe can go to ~16 bits = 2^32).
    test_exhaustive!{p8_exhaustive, crate::p8}
    test_proptest!{p16_proptest, crate::p16}
    test_proptest!{p32_proptest, crate::p32}
    test_proptest!{p64_proptest, crate::p64}
    test_proptest!{posit_16_0_proptest, Posit::<16, 0, u16>}
    test_proptest!{posit_64_5_proptest, Posit::<64, 5, u64>}

    test_exhaustive!{posit_3_0_exhaustive, Posit::<3, 0, u8>}
    test_exhaustive!{posit_4_0_exhaustive, Posit::<4, 0, u8>}
    test_exhaustive!{posit_4_1_exhaustive, Posit::<4, 1, u8>}
    test_exhaustive!{posit_6_6_exhaustive, Posit::<6, 6, u8>}
  }
}

pub(crate) use mk_tests;
