use crate::constants::{SEED_BASIS, SEED_MULTIPLIER};

/// 由密码计算随机数种子。
///
/// 采用 `acc = acc × 33 + c` 的乘法哈希，初始值为 5381，按 64 位无符号数回绕运算。
/// 遇到第一个 NUL 字节即停止，之后的内容不参与哈希。
/// 64 位宽度是编码端与解码端之间约定的一部分，不可更改。
pub fn derive_seed(password: &[u8]) -> u64 {
    password
        .iter()
        .take_while(|&&c| c != 0)
        .fold(SEED_BASIS, |acc, &c| {
            acc.wrapping_mul(SEED_MULTIPLIER).wrapping_add(u64::from(c))
        })
}
