use chrono::Utc;
use rand::Rng;

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Generate a block id: `{type}-{unix millis}-{random base36 suffix}`
pub fn generate_block_id(block_type: &str) -> String {
    format!(
        "{}-{}-{}",
        block_type,
        Utc::now().timestamp_millis(),
        random_suffix()
    )
}

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}
