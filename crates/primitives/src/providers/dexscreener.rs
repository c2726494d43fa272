use eyre::{Result, WrapErr};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Chain assumed for pairs the aggregator returns without a `chainId`. This is the id
/// DexScreener itself uses, not the shorter `sol`.
pub const DEFAULT_CHAIN_ID: &str = "solana";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexToken {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexPair {
    #[serde(default)]
    pub chain_id: Option<String>,
    #[serde(default)]
    pub dex_id: Option<String>,
    pub pair_address: String,
    #[serde(default)]
    pub base_token: Option<DexToken>,
    #[serde(default)]
    pub quote_token: Option<DexToken>,
}

impl DexPair {
    pub fn chain_id(&self) -> &str {
        self.chain_id.as_deref().unwrap_or(DEFAULT_CHAIN_ID)
    }

    pub fn has_base_token(&self, token_address: &str) -> bool {
        self.base_token
            .as_ref()
            .is_some_and(|base_token| base_token.address.eq_ignore_ascii_case(token_address))
    }
}

#[derive(Debug, Deserialize)]
struct PairsResponse {
    #[serde(default)]
    pairs: Option<Vec<DexPair>>,
}

/// Read access to a pair aggregator.
#[allow(async_fn_in_trait)]
pub trait PairSource {
    /// Every pair listing `token_address` on either side.
    async fn token_pairs(&self, token_address: &str) -> Result<Vec<DexPair>>;

    /// The first pair the aggregator returns for the given chain and pair address.
    async fn pair(&self, chain_id: &str, pair_address: &str) -> Result<Option<DexPair>>;
}

pub struct DexScreenerClient {
    client: reqwest::Client,
    base_url: String,
}

impl DexScreenerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    // None when the aggregator answers with anything but a 200
    async fn get_pairs(&self, url: String) -> Result<Option<Vec<DexPair>>> {
        debug!(url, "fetching pairs");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .wrap_err_with(|| format!("GET {} failed", url))?;

        if response.status() != StatusCode::OK {
            warn!(url, status = response.status().as_u16(), "unexpected response status");
            return Ok(None);
        }

        let body = response
            .json::<PairsResponse>()
            .await
            .wrap_err_with(|| format!("failed to parse pairs response from {}", url))?;

        Ok(Some(body.pairs.unwrap_or_default()))
    }
}

impl PairSource for DexScreenerClient {
    async fn token_pairs(&self, token_address: &str) -> Result<Vec<DexPair>> {
        let url = format!("{}/latest/dex/tokens/{}", self.base_url, token_address);
        self.get_pairs(url).await.map(Option::unwrap_or_default)
    }

    async fn pair(&self, chain_id: &str, pair_address: &str) -> Result<Option<DexPair>> {
        let url = format!(
            "{}/latest/dex/pairs/{}/{}",
            self.base_url, chain_id, pair_address
        );
        self.get_pairs(url)
            .await
            .map(|pairs| pairs.and_then(|pairs| pairs.into_iter().next()))
    }
}

#[cfg(test)]
mod tests {
    use super::{DexPair, DexScreenerClient, PairSource, PairsResponse, DEFAULT_CHAIN_ID};

    use eyre::Result;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    const TOKEN: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";

    // Answers every request whose path is listed with the given status and body, anything else
    // with a 404. Returns the base url.
    async fn serve(routes: Vec<(String, u16, &'static str)>) -> Result<String> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut buffer = vec![0_u8; 8192];
                let read = stream.read(&mut buffer).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buffer[..read]).to_string();
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

                let (status, body) = routes
                    .iter()
                    .find(|(route, _, _)| *route == path)
                    .map(|(_, status, body)| (*status, *body))
                    .unwrap_or((404, r#"{"message":"Not Found"}"#));
                let reason = match status {
                    200 => "OK",
                    404 => "Not Found",
                    _ => "Internal Server Error",
                };

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Ok(base_url)
    }

    #[test]
    fn test_deserialize_pairs_response() -> Result<()> {
        let body = r#"{
            "schemaVersion": "1.0.0",
            "pairs": [
                {
                    "chainId": "solana",
                    "dexId": "raydium",
                    "url": "https://dexscreener.com/solana/8sLbNZoA1cfnvMJLPfp98ZLAnFSYCFApfJKMbiXNLwxj",
                    "pairAddress": "8sLbNZoA1cfnvMJLPfp98ZLAnFSYCFApfJKMbiXNLwxj",
                    "baseToken": {
                        "address": "So11111111111111111111111111111111111111112",
                        "name": "Wrapped SOL",
                        "symbol": "SOL"
                    },
                    "quoteToken": {
                        "address": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
                        "name": "USD Coin",
                        "symbol": "USDC"
                    },
                    "priceUsd": "143.21"
                },
                {
                    "pairAddress": "Fy1TSUTxqjHBXWnzYnYmKUzqmKbFGTBDDFRzd7pDdw3R"
                }
            ]
        }"#;

        let response = serde_json::from_str::<PairsResponse>(body)?;
        let pairs = response.pairs.unwrap_or_default();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].dex_id.as_deref(), Some("raydium"));
        assert!(pairs[0].has_base_token("so11111111111111111111111111111111111111112"));
        assert!(!pairs[0].has_base_token("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"));
        assert_eq!(pairs[1].chain_id(), DEFAULT_CHAIN_ID);
        assert!(!pairs[1].has_base_token("So11111111111111111111111111111111111111112"));

        Ok(())
    }

    #[test]
    fn test_deserialize_null_pairs() -> Result<()> {
        let response = serde_json::from_str::<PairsResponse>(
            r#"{"schemaVersion": "1.0.0", "pairs": null}"#,
        )?;
        assert_eq!(response.pairs, None::<Vec<DexPair>>);

        Ok(())
    }

    #[tokio::test]
    async fn test_not_found_is_empty() -> Result<()> {
        let client = DexScreenerClient::new(serve(vec![]).await?);

        assert_eq!(client.token_pairs(TOKEN).await?, Vec::<DexPair>::new());
        assert_eq!(client.pair("solana", "pairA").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_server_error_is_empty() -> Result<()> {
        let client = DexScreenerClient::new(
            serve(vec![
                (format!("/latest/dex/tokens/{}", TOKEN), 500, "upstream failure"),
                ("/latest/dex/pairs/solana/pairA".to_string(), 500, "upstream failure"),
            ])
            .await?,
        );

        assert_eq!(client.token_pairs(TOKEN).await?, Vec::<DexPair>::new());
        assert_eq!(client.pair("solana", "pairA").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_null_pairs_is_empty() -> Result<()> {
        let client = DexScreenerClient::new(
            serve(vec![
                (
                    format!("/latest/dex/tokens/{}", TOKEN),
                    200,
                    r#"{"schemaVersion":"1.0.0","pairs":null}"#,
                ),
                (
                    "/latest/dex/pairs/solana/pairA".to_string(),
                    200,
                    r#"{"schemaVersion":"1.0.0","pairs":null}"#,
                ),
            ])
            .await?,
        );

        assert_eq!(client.token_pairs(TOKEN).await?, Vec::<DexPair>::new());
        assert_eq!(client.pair("solana", "pairA").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_pair_returns_first_listed() -> Result<()> {
        let base_url = serve(vec![(
            "/latest/dex/pairs/solana/pairA".to_string(),
            200,
            r#"{"pairs":[{"chainId":"solana","dexId":"raydium","pairAddress":"pairA","baseToken":{"address":"DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263"}},{"pairAddress":"pairB"}]}"#,
        )])
        .await?;
        // trailing slash is trimmed
        let client = DexScreenerClient::new(format!("{}/", base_url));

        let pair = client.pair("solana", "pairA").await?;

        assert_eq!(
            pair.as_ref().and_then(|pair| pair.dex_id.as_deref()),
            Some("raydium")
        );
        assert!(pair.is_some_and(|pair| pair.has_base_token(TOKEN)));

        Ok(())
    }
}
