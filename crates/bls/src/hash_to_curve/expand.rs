use crate::{
    constants::{MAX_DOMAIN_LEN, XMD_BLOCK_LEN, XMD_INPUT_BLOCK_LEN, XMD_MAX_BLOCKS},
    BlsError,
};
use alloy_primitives::{Keccak256, B256};
use log::debug;
use std::vec::Vec;

/// `expand_message_xmd` from RFC 9380, section 5.3.1, instantiated with Keccak-256.
///
/// Returns `out_len` pseudorandom bytes derived from `msg` under the domain
/// separation tag `domain`.
///
/// # Errors
///
/// * [`BlsError::DomainTooLong`] if `domain` is longer than 255 bytes.
/// * [`BlsError::InvalidExpansionLength`] if the output needs more than 255 blocks.
pub fn expand_message_xmd(domain: &[u8], msg: &[u8], out_len: usize) -> Result<Vec<u8>, BlsError> {
    if domain.len() > MAX_DOMAIN_LEN {
        return Err(BlsError::DomainTooLong);
    }
    let ell = out_len.div_ceil(XMD_BLOCK_LEN);
    if ell > XMD_MAX_BLOCKS {
        return Err(BlsError::InvalidExpansionLength);
    }
    debug!(
        "expand_message_xmd: domain_len={}, msg_len={}, out_len={out_len}",
        domain.len(),
        msg.len()
    );

    // Both casts are in range after the checks above.
    let dst_len = [domain.len() as u8];
    let len_in_bytes = (out_len as u16).to_be_bytes();

    let mut hasher = Keccak256::new();
    hasher.update([0u8; XMD_INPUT_BLOCK_LEN]);
    hasher.update(msg);
    hasher.update(len_in_bytes);
    hasher.update([0u8]);
    hasher.update(domain);
    hasher.update(dst_len);
    let b0 = hasher.finalize();

    let mut out = Vec::with_capacity(ell * XMD_BLOCK_LEN);
    let mut prev = B256::ZERO;
    for i in 1..=ell {
        // b_1 = H(b_0 || 1 || DST'), b_i = H((b_0 ^ b_(i-1)) || i || DST')
        let chained = if i == 1 { b0 } else { b0 ^ prev };
        let mut hasher = Keccak256::new();
        hasher.update(chained);
        hasher.update([i as u8]);
        hasher.update(domain);
        hasher.update(dst_len);
        prev = hasher.finalize();
        out.extend_from_slice(prev.as_slice());
    }
    out.truncate(out_len);
    Ok(out)
}
