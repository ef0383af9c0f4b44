// catalog_seed/src/generate.rs

//! Random but searchable product data.

use crate::config::SeedConfig;
use crate::models::ProductDraft;
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;

const BRANDS: &[&str] = &[
  "Apex", "Nova", "Orion", "Vertex", "Zenith", "Hyper", "Titan", "Lumen", "Nimbus", "Sigma",
];

const PRODUCT_TYPES: &[&str] = &[
  "Laptop", "Monitor", "Mouse", "Keyboard", "CPU", "GPU", "SSD", "HDD", "Router", "Switch", "Headphones", "Webcam",
  "Printer", "Tablet", "Smartphone", "PSU", "RAM", "Motherboard",
];

const KEYWORDS: &[&str] = &[
  "gaming", "pro", "ultra", "office", "student", "creator", "wireless", "rgb", "4k", "portable", "budget", "premium",
];

const DESCRIPTION_EXTRAS: &[&str] = &[
  "Built to last",
  "Low power draw",
  "Excellent performance",
  "Ideal for work and study",
  "Limited edition",
  "12-month warranty",
  "Fast shipping",
  "Modern design",
];

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Tag stamped into every product name of one run, e.g. `SEED-1760000000`.
pub fn seed_tag() -> String {
  format!("SEED-{}", Utc::now().timestamp())
}

/// Nanosecond stamp used to keep seeded emails unique.
pub fn stamp_nanos() -> i64 {
  let now = Utc::now();
  now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp_micros() * 1_000)
}

/// `n` random lowercase alphanumerics.
pub fn rand_suffix<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
  (0..n)
    .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
    .collect()
}

/// `{tag} {brand} {type} {kw1} {kw2} {model} #{i}` with two different keywords.
pub fn product_name<R: Rng + ?Sized>(rng: &mut R, index: usize, tag: &str) -> String {
  let brand = pick(rng, BRANDS);
  let product_type = pick(rng, PRODUCT_TYPES);
  let mut keywords = KEYWORDS.choose_multiple(rng, 2);
  let (kw1, kw2) = (keywords.next().copied().unwrap_or("pro"), keywords.next().copied().unwrap_or("ultra"));
  let model = format!("{}{}", rng.gen_range(b'A'..=b'Z') as char, rng.gen_range(10..=999));
  format!("{tag} {brand} {product_type} {kw1} {kw2} {model} #{index}")
}

pub fn product_description<R: Rng + ?Sized>(rng: &mut R, name: &str) -> String {
  let extra = pick(rng, DESCRIPTION_EXTRAS);
  format!("{name}. {extra}. SKU-{}", rand_suffix(rng, 8).to_uppercase())
}

/// Mixed-tier price: 55% in [min, 200], 35% in [200, 1500], 10% in
/// [1500, max]; clamped to the configured bounds and rounded to cents.
pub fn product_price<R: Rng + ?Sized>(rng: &mut R, cfg: &SeedConfig) -> f64 {
  let roll: f64 = rng.gen();
  let (lo, hi) = if roll < 0.55 {
    (cfg.price_min, 200.0)
  } else if roll < 0.90 {
    (200.0, 1500.0)
  } else {
    (1500.0, cfg.price_max)
  };
  let (lo, hi) = (lo.min(hi), lo.max(hi));
  let raw = rng.gen_range(lo..=hi).clamp(cfg.price_min, cfg.price_max);
  let rounded = (raw * 100.0).round() / 100.0;
  rounded.clamp(cfg.price_min, cfg.price_max)
}

pub fn product_draft<R: Rng + ?Sized>(rng: &mut R, index: usize, tag: &str, cfg: &SeedConfig) -> ProductDraft {
  let name = product_name(rng, index, tag);
  let description = product_description(rng, &name);
  let price = product_price(rng, cfg);
  ProductDraft {
    index,
    name,
    description,
    price,
  }
}

/// `k` distinct ids from `pool`, or fewer if the pool is smaller.
pub fn sample_ids<R: Rng + ?Sized>(rng: &mut R, pool: &[i64], k: usize) -> Vec<i64> {
  pool.choose_multiple(rng, k).copied().collect()
}

pub fn pick_id<R: Rng + ?Sized>(rng: &mut R, pool: &[i64]) -> Option<i64> {
  pool.choose(rng).copied()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &'static [&'static str]) -> &'static str {
  words.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;
  use std::collections::HashSet;

  #[test]
  fn names_are_tagged_indexed_and_use_distinct_keywords() {
    let mut rng = StdRng::seed_from_u64(7);
    for i in 0..200 {
      let name = product_name(&mut rng, i, "SEED-1");
      let parts: Vec<&str> = name.split(' ').collect();
      assert_eq!(parts.len(), 7, "{name}");
      assert_eq!(parts[0], "SEED-1");
      assert!(BRANDS.contains(&parts[1]));
      assert!(PRODUCT_TYPES.contains(&parts[2]));
      assert_ne!(parts[3], parts[4]);
      assert!(parts[5].chars().next().unwrap().is_ascii_uppercase());
      let model_number: u32 = parts[5][1..].parse().unwrap();
      assert!((10..=999).contains(&model_number));
      assert_eq!(parts[6], format!("#{i}"));
    }
  }

  #[test]
  fn description_embeds_name_and_sku() {
    let mut rng = StdRng::seed_from_u64(1);
    let description = product_description(&mut rng, "Nova SSD");
    assert!(description.starts_with("Nova SSD. "));
    let sku = description.rsplit("SKU-").next().unwrap();
    assert_eq!(sku.len(), 8);
    assert!(sku.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
  }

  #[test]
  fn prices_stay_in_bounds_and_cover_every_tier() {
    let cfg = SeedConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    let prices: Vec<f64> = (0..5000).map(|_| product_price(&mut rng, &cfg)).collect();

    assert!(prices.iter().all(|p| cfg.price_in_bounds(*p)));
    assert!(prices.iter().all(|p| ((p * 100.0).round() - p * 100.0).abs() < 1e-6));

    let low = prices.iter().filter(|p| **p < 200.0).count() as f64 / prices.len() as f64;
    let high = prices.iter().filter(|p| **p > 1500.0).count() as f64 / prices.len() as f64;
    assert!((0.50..0.60).contains(&low), "low tier share {low}");
    assert!((0.07..0.13).contains(&high), "high tier share {high}");
  }

  #[test]
  fn narrow_price_bounds_do_not_panic() {
    let cfg = SeedConfig {
      price_min: 50.0,
      price_max: 100.0,
      ..SeedConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
      let price = product_price(&mut rng, &cfg);
      assert!(cfg.price_in_bounds(price), "{price}");
    }
  }

  #[test]
  fn sampled_ids_are_distinct() {
    let mut rng = StdRng::seed_from_u64(9);
    let pool: Vec<i64> = (1..=30).collect();
    for _ in 0..100 {
      let sample = sample_ids(&mut rng, &pool, 2);
      assert_eq!(sample.len(), 2);
      assert_eq!(sample.iter().collect::<HashSet<_>>().len(), 2);
    }
    assert_eq!(sample_ids(&mut rng, &[5], 2), vec![5]);
    assert_eq!(pick_id(&mut rng, &[]), None);
  }

  #[test]
  fn suffix_uses_lowercase_alphanumerics() {
    let mut rng = StdRng::seed_from_u64(11);
    let suffix = rand_suffix(&mut rng, 4);
    assert_eq!(suffix.len(), 4);
    assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
  }
}
