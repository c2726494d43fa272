use alloy::{primitives::Bytes, sol, sol_types::SolCall};

use eyre::{Result, WrapErr};

sol! {
    interface IERC20 {
        event Transfer(address indexed from, address indexed to, uint256 value);

        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
    }
}

pub fn name_call_data() -> Bytes {
    IERC20::nameCall {}.abi_encode().into()
}

pub fn symbol_call_data() -> Bytes {
    IERC20::symbolCall {}.abi_encode().into()
}

pub fn decimals_call_data() -> Bytes {
    IERC20::decimalsCall {}.abi_encode().into()
}

pub fn decode_name_returns(data: &[u8]) -> Result<String> {
    IERC20::nameCall::abi_decode_returns(data, cfg!(debug_assertions))
        .map(|returns| returns._0)
        .wrap_err("failed to abi decode name returns")
}

pub fn decode_symbol_returns(data: &[u8]) -> Result<String> {
    IERC20::symbolCall::abi_decode_returns(data, cfg!(debug_assertions))
        .map(|returns| returns._0)
        .wrap_err("failed to abi decode symbol returns")
}

pub fn decode_decimals_returns(data: &[u8]) -> Result<u8> {
    IERC20::decimalsCall::abi_decode_returns(data, cfg!(debug_assertions))
        .map(|returns| returns._0)
        .wrap_err("failed to abi decode decimals returns")
}
