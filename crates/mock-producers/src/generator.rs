//! Deterministic producer generation.
//!
//! A [`ProducerGenerator`] owns a seeded `ChaCha8` stream, so two generators
//! built from the same seed emit identical producers in the same order.

use fake::Fake;
use fake::faker::address::raw::CityName;
use fake::faker::company::raw::CompanyName;
use fake::faker::name::raw::Name;
use fake::locales::PT_BR;
use producer_rules::{check_land_use, cnpj_check_digits, cpf_check_digits};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::seed::ProducerSeed;
use crate::vocabulary::{CROP_VOCABULARY, STATE_CODES};

/// Maximum number of farmable/vegetation draws before falling back to a
/// fixed split of the total area.
pub const MAX_SPLIT_ATTEMPTS: usize = 64;

/// Largest total area in hundredths of a hectare (9999.99 ha).
const MAX_TOTAL_CENTS: u32 = 999_999;

/// Largest farmable area draw in hundredths of a hectare (999.99 ha).
const MAX_FARMABLE_CENTS: u32 = 99_999;

/// Largest vegetation area draw in hundredths of a hectare (99.99 ha).
const MAX_VEGETATION_CENTS: u32 = 9_999;

/// Fallback farmable share of the total area, in tenths.
const FALLBACK_FARMABLE_TENTHS: u32 = 6;

/// Fallback vegetation share of the total area, in tenths.
const FALLBACK_VEGETATION_TENTHS: u32 = 3;

const MIN_CROPS: usize = 1;
const MAX_CROPS: usize = 3;

/// Three in four generated producers are individuals (CPF).
const CPF_PROBABILITY_NUMERATOR: u32 = 3;
const CPF_PROBABILITY_DENOMINATOR: u32 = 4;

/// Number of random digits in a generated CNPJ root.
const CNPJ_ROOT_DIGITS: usize = 8;

/// Generates synthetic producers from a seeded RNG.
#[derive(Debug, Clone)]
pub struct ProducerGenerator {
    rng: ChaCha8Rng,
}

impl ProducerGenerator {
    /// Creates a generator whose output is fully determined by `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from the thread-local RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Produces the next producer in the stream.
    ///
    /// The record always carries a valid document number, a state from
    /// [`STATE_CODES`], between one and three distinct crops from
    /// [`CROP_VOCABULARY`], and areas that satisfy
    /// [`producer_rules::check_land_use`].
    pub fn next_producer(&mut self) -> ProducerSeed {
        let rng = &mut self.rng;

        let document_number = draw_document(rng);
        let producer_name: String = Name(PT_BR).fake_with_rng(rng);
        let farm_name: String = CompanyName(PT_BR).fake_with_rng(rng);
        let city: String = CityName(PT_BR).fake_with_rng(rng);
        let state = STATE_CODES
            .choose(rng)
            .map_or_else(String::new, |code| (*code).to_owned());

        let total_cents = rng.random_range(1..=MAX_TOTAL_CENTS);
        let (farmable_cents, vegetation_cents) = split_land(rng, total_cents);
        let crops = select_subset(rng, &CROP_VOCABULARY, MIN_CROPS, MAX_CROPS);

        ProducerSeed {
            document_number,
            producer_name,
            farm_name,
            city,
            state,
            total_area: hectares(total_cents),
            farmable_area: hectares(farmable_cents),
            vegetation_area: hectares(vegetation_cents),
            crops,
        }
    }

    /// Produces `count` producers.
    ///
    /// Document numbers are drawn independently, so a batch may contain
    /// duplicates; consumers that persist the batch skip them.
    #[must_use]
    pub fn generate(&mut self, count: usize) -> Vec<ProducerSeed> {
        (0..count).map(|_| self.next_producer()).collect()
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "areas are carried as hundredths of a hectare until output"
)]
fn hectares(cents: u32) -> f64 {
    f64::from(cents) / 100.0
}

/// Draws farmable and vegetation areas that fit inside `total_cents`.
///
/// Candidates are accepted using the same floating-point check the registry
/// applies. After [`MAX_SPLIT_ATTEMPTS`] rejections the split becomes 60%
/// farmable and 30% vegetation, which always fits.
fn split_land(rng: &mut ChaCha8Rng, total_cents: u32) -> (u32, u32) {
    let total = hectares(total_cents);
    for _ in 0..MAX_SPLIT_ATTEMPTS {
        let farmable = rng.random_range(0..=MAX_FARMABLE_CENTS);
        let vegetation = rng.random_range(0..=MAX_VEGETATION_CENTS);
        if check_land_use(total, hectares(farmable), hectares(vegetation)).is_ok() {
            return (farmable, vegetation);
        }
    }
    fallback_split(total_cents)
}

#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "rounding the fallback shares down keeps their sum below the total"
)]
const fn fallback_split(total_cents: u32) -> (u32, u32) {
    (
        total_cents * FALLBACK_FARMABLE_TENTHS / 10,
        total_cents * FALLBACK_VEGETATION_TENTHS / 10,
    )
}

fn draw_document(rng: &mut ChaCha8Rng) -> String {
    if rng.random_ratio(CPF_PROBABILITY_NUMERATOR, CPF_PROBABILITY_DENOMINATOR) {
        draw_cpf(rng)
    } else {
        draw_cnpj(rng)
    }
}

fn draw_cpf(rng: &mut ChaCha8Rng) -> String {
    let mut base = [0_u8; 9];
    loop {
        fill_digits(rng, &mut base);
        // A base of one repeated digit also yields repeated check digits.
        if base.iter().any(|digit| Some(digit) != base.first()) {
            break;
        }
    }
    let check = cpf_check_digits(base);
    digits_to_string(base.iter().chain(check.iter()))
}

fn draw_cnpj(rng: &mut ChaCha8Rng) -> String {
    // Eight-digit root followed by the head-office branch 0001.
    let mut base = [0_u8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1];
    for digit in base.iter_mut().take(CNPJ_ROOT_DIGITS) {
        *digit = rng.random_range(0..=9);
    }
    let check = cnpj_check_digits(base);
    digits_to_string(base.iter().chain(check.iter()))
}

fn fill_digits(rng: &mut ChaCha8Rng, digits: &mut [u8]) {
    for digit in digits.iter_mut() {
        *digit = rng.random_range(0..=9);
    }
}

fn digits_to_string<'a>(digits: impl Iterator<Item = &'a u8>) -> String {
    digits.map(|digit| char::from(b'0' + digit)).collect()
}

/// Selects between `min_count` and `max_count` distinct entries of `items`.
///
/// Bounds are clamped to the slice length. The chosen entries keep the
/// order in which they appear in `items`.
fn select_subset(
    rng: &mut ChaCha8Rng,
    items: &[&str],
    min_count: usize,
    max_count: usize,
) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }

    let clamped_min = min_count.min(items.len());
    let clamped_max = max_count.min(items.len());
    let count = if clamped_min == clamped_max {
        clamped_min
    } else {
        rng.random_range(clamped_min..=clamped_max)
    };

    let mut positions: Vec<usize> = (0..items.len()).collect();
    positions.shuffle(rng);
    positions.truncate(count);
    positions.sort_unstable();
    positions
        .into_iter()
        .filter_map(|position| items.get(position))
        .map(|item| (*item).to_owned())
        .collect()
}
