use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use posit_quire::{p32, p64, q32, q64, RoundFrom};

// Establish a baseline by comparing with a single fpu add

fn baseline_fpu_add_f32(c: &mut Criterion) {
  c.bench_function("baseline_fpu_add_f32", |b| {
    b.iter(|| black_box(3.14_f32) + black_box(69.420_f32));
  });
}

fn baseline_fpu_add_f64(c: &mut Criterion) {
  c.bench_function("baseline_fpu_add_f64", |b| {
    b.iter(|| black_box(3.14_f64) + black_box(69.420_f64));
  });
}

fn nums_32() -> [p32; 4] {
  [
    p32::from_bits(0b00101011100101110110111101100011),
    p32::from_bits(0b00000000010101010100111100100101),
    p32::from_bits(0b11010100001001010100101000101110),
    p32::from_bits(0b01110010011111001111001001110000),
  ]
}

fn nums_64() -> [p64; 4] {
  [
    p64::from_bits(0b0010101110010111011011110110001100101001101111011111000111100111),
    p64::from_bits(0b0000000001010101010011110010010100011000100101110110100010000011),
    p64::from_bits(0b1101010000100101010010100010111011010010011010111001111111001011),
    p64::from_bits(0b0111001001111100111100100111000011010111000101000001001101001111),
  ]
}

// Time decoding and encoding 1 posit

fn decode_p32(c: &mut Criterion) {
  let mut g = c.benchmark_group("decode_p32");
  for num in nums_32() {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(format_args!("0b{:032b}", num.to_bits())), &num, |b, &num| {
      b.iter(|| {
        let num = black_box(num);
        (num.is_negative(), num.scale_factor(), num.fraction_with_hidden_bit())
      });
    });
  }
  g.finish();
}

fn encode_p32(c: &mut Criterion) {
  let mut g = c.benchmark_group("encode_p32");
  for num in nums_32() {
    let parts = (num.is_negative(), num.scale_factor(), u128::from(num.fraction_with_hidden_bit()));
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(format_args!("0b{:032b}", num.to_bits())), &parts, |b, &(sign, scale, frac)| {
      b.iter(|| p32::from_parts(black_box(sign), black_box(scale), black_box(frac)));
    });
  }
  g.finish();
}

// Time the arithmetic operations

macro_rules! bench_binary_op {
  ($name:ident, $nums:ident, $op:tt) => {
    fn $name(c: &mut Criterion) {
      let mut g = c.benchmark_group(stringify!($name));
      let nums = $nums();
      for (&x, &y) in nums.iter().zip(nums.iter().skip(1)) {
        g.throughput(Throughput::Elements(1));
        g.bench_with_input(BenchmarkId::from_parameter(format_args!("{:x}/{:x}", x.to_bits(), y.to_bits())), &(x, y), |b, &(x, y)| {
          b.iter(|| black_box(x) $op black_box(y));
        });
      }
      g.finish();
    }
  };
}

bench_binary_op!{add_p32, nums_32, +}
bench_binary_op!{sub_p32, nums_32, -}
bench_binary_op!{mul_p32, nums_32, *}
bench_binary_op!{div_p32, nums_32, /}
bench_binary_op!{add_p64, nums_64, +}
bench_binary_op!{mul_p64, nums_64, *}
bench_binary_op!{div_p64, nums_64, /}

fn sqrt_p32(c: &mut Criterion) {
  let mut g = c.benchmark_group("sqrt_p32");
  for num in nums_32() {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(format_args!("0b{:032b}", num.to_bits())), &num, |b, &num| {
      b.iter(|| black_box(num).sqrt());
    });
  }
  g.finish();
}

// Time the quire

fn dot_product(c: &mut Criterion) {
  const LEN: usize = 1024;
  let mut g = c.benchmark_group("dot_product");
  g.throughput(Throughput::Elements(LEN as u64));

  let a32: Vec<p32> = (0 .. LEN).map(|i| p32::round_from((i as f64).sin())).collect();
  let b32: Vec<p32> = (0 .. LEN).map(|i| p32::round_from((i as f64).cos() * 1e3)).collect();
  g.bench_function("q32", |b| b.iter(|| q32::fused_dot_product(black_box(&a32), black_box(&b32))));
  g.bench_function("p32_naive", |b| b.iter(|| {
    black_box(&a32).iter().zip(black_box(&b32)).fold(p32::ZERO, |sum, (&x, &y)| sum + x * y)
  }));

  let a64: Vec<p64> = (0 .. LEN).map(|i| p64::round_from((i as f64).sin())).collect();
  let b64: Vec<p64> = (0 .. LEN).map(|i| p64::round_from((i as f64).cos() * 1e3)).collect();
  g.bench_function("q64", |b| b.iter(|| q64::fused_dot_product(black_box(&a64), black_box(&b64))));

  g.finish();
}

criterion_group!(baseline_fpu,
  baseline_fpu_add_f32,
  baseline_fpu_add_f64,
);

criterion_group!(codec,
  decode_p32,
  encode_p32,
);

criterion_group!(ops,
  add_p32,
  sub_p32,
  mul_p32,
  div_p32,
  add_p64,
  mul_p64,
  div_p64,
  sqrt_p32,
);

criterion_group!(quire,
  dot_product,
);

criterion_main!(baseline_fpu, codec, ops, quire);
