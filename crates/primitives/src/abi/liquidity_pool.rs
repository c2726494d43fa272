use alloy::sol;

// Emitted alongside pool creation when LP tokens are minted
sol! {
    interface ILiquidityPool {
        event Mint(address indexed sender, uint256 amount0, uint256 amount1, uint256 liquidity);
    }
}
