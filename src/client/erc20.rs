//! ERC-20 view interface used for balance and metadata queries.

use alloy_sol_types::sol;

sol! {
    /// Minimal ERC-20 read surface: balance plus the two metadata views
    /// the aggregation engine resolves per token. Anything beyond these
    /// (transfers, approvals) is out of scope for a read-only scanner.
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract Erc20 {
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string);
    }
}
