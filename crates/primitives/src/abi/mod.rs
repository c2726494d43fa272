pub use algebra_pool::IAlgebraPool;
pub use erc20::IERC20;
pub use liquidity_pool::ILiquidityPool;
pub use uniswap_v3_factory::IUniswapV3Factory;

pub mod algebra_pool;
pub mod erc20;
pub mod liquidity_pool;
pub mod uniswap_v3_factory;
