use super::*;

/// Build a metadata URL from `prefix`, the token ID in decimal and `suffix`.
///
/// The parts are concatenated as they are. An empty prefix means metadata is
/// not published yet and gives an empty URL.
pub fn build_token_uri(prefix: &str, token_id: &ContractTokenId, suffix: &str) -> String {
    if prefix.is_empty() {
        return String::new();
    }

    let mut token_uri = String::from(prefix);
    push_token_id(&mut token_uri, token_id);
    token_uri.push_str(suffix);
    token_uri
}

pub fn push_token_id(string: &mut String, token_id: &ContractTokenId) {
    let mut digits = [0u8; 10];
    let mut value = token_id.0;
    let mut len = 0;
    loop {
        digits[len] = b'0' + (value % 10) as u8;
        value /= 10;
        len += 1;
        if value == 0 {
            break;
        }
    }

    for digit in digits[..len].iter().rev() {
        string.push(*digit as char);
    }
}

pub fn token_metadata_event(
    token_id: ContractTokenId,
    url: String,
) -> Cis2Event<ContractTokenId, ContractTokenAmount> {
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: MetadataUrl { url, hash: None },
    })
}

impl<S: HasStateApi> State<S> {
    /// Metadata URL of a token under the current configuration, whether or
    /// not it has been issued yet.
    #[inline(always)]
    pub fn build_token_uri(&self, token_id: &ContractTokenId) -> String {
        build_token_uri(&self.config.uri_prefix, token_id, &self.config.uri_suffix)
    }

    /// Metadata URL of an issued token.
    ///
    /// It rejects if the token ID has not been issued.
    pub fn token_uri(&self, token_id: &ContractTokenId) -> ContractResult<String> {
        ensure!(
            self.contains_token(token_id),
            CustomContractError::NotFound.into()
        );
        Ok(self.build_token_uri(token_id))
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn token_id_formatting() {
        for x in (0u32..1_000).chain([9_999, 10_000, 6_969, u32::MAX]) {
            let mut token_id_string = String::new();
            push_token_id(&mut token_id_string, &TokenIdU32(x));
            claim_eq!(token_id_string, x.to_string());
        }
    }

    #[concordium_test]
    fn token_uri_is_plain_concatenation() {
        claim_eq!(
            build_token_uri("ipfs://{CID}/", &TokenIdU32(1), ".json"),
            "ipfs://{CID}/1.json"
        );
        // No separator gets inserted
        claim_eq!(build_token_uri("123456", &TokenIdU32(42), ".png"), "12345642.png");
        claim_eq!(build_token_uri("ipfs://x/", &TokenIdU32(7), ""), "ipfs://x/7");
        claim_eq!(build_token_uri("", &TokenIdU32(7), ".json"), "");
    }
}
