//! Node id generation.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_LEN: usize = 9;

fn to_base36(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

fn current_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Generates `{prefix or type}-{timestamp}-{random}`.
///
/// Uniqueness is probabilistic: nine random base-36 characters on top of a
/// millisecond timestamp.
///
/// ```
/// let id = ui_ir_tree::generate_id("Button", None);
/// assert!(id.starts_with("Button-"));
/// assert_ne!(id, ui_ir_tree::generate_id("Button", None));
/// ```
pub fn generate_id(type_name: &str, prefix: Option<&str>) -> String {
    let mut rng = rand::thread_rng();
    let random: String = (0..RANDOM_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!(
        "{}-{}-{}",
        prefix.unwrap_or(type_name),
        to_base36(current_ms()),
        random
    )
}

/// Source of ids for a [`NodeFactory`](crate::NodeFactory).
#[derive(Debug, Clone)]
pub enum IdGenerator {
    /// Timestamp plus random suffix, see [`generate_id`].
    Random { prefix: Option<String> },
    /// `{prefix or type}-{n}` with `n` counting up from 1.
    Sequential { prefix: Option<String>, next: u64 },
}

impl IdGenerator {
    pub fn sequential() -> Self {
        IdGenerator::Sequential {
            prefix: None,
            next: 1,
        }
    }

    pub fn next_id(&mut self, type_name: &str) -> String {
        match self {
            IdGenerator::Random { prefix } => generate_id(type_name, prefix.as_deref()),
            IdGenerator::Sequential { prefix, next } => {
                let id = format!("{}-{}", prefix.as_deref().unwrap_or(type_name), next);
                *next += 1;
                id
            }
        }
    }
}
