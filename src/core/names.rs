//! Curated horse names and silk colors, with synthetic fallbacks once the
//! lists run out.

use rand::Rng;

pub const HORSE_NAMES: [&str; 20] = [
    "Thunder Bolt",
    "Lightning Flash",
    "Storm Rider",
    "Wind Walker",
    "Fire Spirit",
    "Golden Arrow",
    "Silver Streak",
    "Midnight Star",
    "Racing Rainbow",
    "Rocket Runner",
    "Racing Rebel",
    "Shadow Hunter",
    "Blazing Comet",
    "Diamond Dash",
    "Crimson Fury",
    "Mystic Wings",
    "Star Chaser",
    "Victory Charge",
    "Noble Knight",
    "Dream Catcher",
];

pub const HORSE_COLORS: [&str; 20] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8",
    "#F06292", "#AED581", "#FFD54F", "#FF8A65", "#BA68C8", "#64B5F6", "#4DB6AC",
    "#81C784", "#FFB74D", "#F48FB1", "#9575CD", "#7986CB", "#A1887F",
];

/// Name for horse `id` (1-based). Falls back to a synthetic label when the
/// curated list is exhausted.
pub fn horse_name(id: u32) -> String {
    (id as usize)
        .checked_sub(1)
        .and_then(|i| HORSE_NAMES.get(i))
        .map(|n| n.to_string())
        .unwrap_or_else(|| format!("Horse {}", id))
}

/// Silk color for horse `id` (1-based). Falls back to a pseudo-random hex
/// color when the curated palette is exhausted.
pub fn horse_color(id: u32, rng: &mut impl Rng) -> String {
    (id as usize)
        .checked_sub(1)
        .and_then(|i| HORSE_COLORS.get(i))
        .map(|c| c.to_string())
        .unwrap_or_else(|| format!("#{:06X}", rng.gen_range(0..0x1000000)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn curated_names_cover_default_roster() {
        for id in 1..=20 {
            assert_eq!(horse_name(id), HORSE_NAMES[id as usize - 1]);
        }
    }

    #[test]
    fn name_falls_back_past_curated_list() {
        assert_eq!(horse_name(21), "Horse 21");
    }

    #[test]
    fn color_falls_back_to_valid_hex() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let color = horse_color(99, &mut rng);
        assert!(color.starts_with('#'));
        assert_eq!(color.len(), 7);
        assert!(u32::from_str_radix(&color[1..], 16).is_ok());
    }
}
