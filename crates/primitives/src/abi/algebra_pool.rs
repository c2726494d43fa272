use alloy::sol;

// Camelot v3 pools are Algebra pools. The Swap event shares its layout with Uniswap v3.
sol! {
    interface IAlgebraPool {
        event Swap(
            address indexed sender,
            address indexed recipient,
            int256 amount0,
            int256 amount1,
            uint160 price,
            uint128 liquidity,
            int24 tick
        );
    }
}
