//! ERC20 contract bindings.

use alloy::sol;

// ERC20 read interface. `name`, `symbol` and `decimals` are optional in the standard.
sol! {
    #[sol(rpc)]
    interface IERC20 {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
    }
}
