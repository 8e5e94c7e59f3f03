use serde_json::{json, Map, Value};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform index in `0..n`.
    fn pick(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

/// Weighted category mix. The last two are deliberately outside the
/// dashboard's allow-list so generated files exercise the filter.
const CATEGORIES: &[(&str, u32)] = &[
    ("Hospital", 2),
    ("Health Center", 4),
    ("Clinic", 5),
    ("School", 6),
    ("Police Station", 2),
    ("University", 1),
    ("Bakery", 1),
    ("Market", 1),
];

/// District name with an approximate center for coordinate jitter.
const DISTRICTS: &[(&str, f64, f64)] = &[
    ("Kampala", 0.3476, 32.5825),
    ("Wakiso", 0.4044, 32.4594),
    ("Mukono", 0.3533, 32.7553),
    ("Mpigi", 0.2300, 32.3136),
    ("Luwero", 0.8493, 32.4920),
    ("Buikwe", 0.3375, 33.0088),
];

const NAME_STEMS: &[&str] = &[
    "St. Mary", "Victoria", "Unity", "Crested Crane", "Pearl", "Greenhill",
    "Namirembe", "Kisubi", "Lakeside", "Sunrise",
];

fn pick_category(rng: &mut SimpleRng) -> &'static str {
    let total: u32 = CATEGORIES.iter().map(|(_, w)| w).sum();
    let mut roll = (rng.next_u64() % total as u64) as u32;
    for (name, weight) in CATEGORIES {
        if roll < *weight {
            return name;
        }
        roll -= weight;
    }
    CATEGORIES[0].0
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let n_facilities = 150;

    let mut records: Vec<Value> = Vec::with_capacity(n_facilities);
    let mut dropped = 0usize;

    for i in 0..n_facilities {
        let category = pick_category(&mut rng);
        let (district, lat0, lng0) = DISTRICTS[rng.pick(DISTRICTS.len())];
        let stem = NAME_STEMS[rng.pick(NAME_STEMS.len())];

        if matches!(category, "Bakery" | "Market") {
            dropped += 1;
        }

        let mut record = Map::new();
        record.insert("name".into(), json!(format!("{stem} {category} {}", i + 1)));
        record.insert("type".into(), json!(category));
        record.insert("district".into(), json!(district));
        let lat = lat0 + (rng.next_f64() - 0.5) * 0.3;
        let lng = lng0 + (rng.next_f64() - 0.5) * 0.3;
        record.insert("lat".into(), json!((lat * 1e4).round() / 1e4));
        record.insert("lng".into(), json!((lng * 1e4).round() / 1e4));
        record.insert(
            "address".into(),
            json!(format!("Plot {}, {district} Rd", rng.pick(200) + 1)),
        );

        // Roughly a quarter of facilities carry no rating.
        if rng.next_f64() < 0.75 {
            let rating = ((2.5 + rng.next_f64() * 2.5) * 10.0).round() / 10.0;
            record.insert("rating".into(), json!(rating));
        }

        records.push(Value::Object(record));
    }

    let output_path = "sample_facilities.json";
    let text = serde_json::to_string_pretty(&Value::Array(records))
        .expect("Failed to serialize records");
    std::fs::write(output_path, text).expect("Failed to write output file");

    println!(
        "Wrote {n_facilities} facilities ({} outside the allow-list) to {output_path}",
        dropped
    );
}
