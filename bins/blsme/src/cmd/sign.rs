use super::Error;
use bls::{hash_to_point, serializer::compact, KeyPair, MessageInput, DEFAULT_DOMAIN};
use clap::Parser;
use serde::Serialize;

/// `sign` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Seed the secret key is hashed from
    secret_seed: String,
    /// Message to sign, `0x`-prefixed hex or UTF-8 text
    message: MessageInput,
    /// Domain separation tag
    #[arg(long, default_value = DEFAULT_DOMAIN)]
    domain: MessageInput,
}

/// Public key and signature in the compact beacon encoding.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub pub_key: String,
    pub signature: String,
}

impl Cmd {
    /// Derives the key pair and signs the hashed message.
    pub fn output(&self) -> Result<Output, Error> {
        let pair = KeyPair::from_seed(self.secret_seed.as_bytes())?;
        let domain = self.domain.clone().into_bytes()?;
        let message = hash_to_point(&domain, &self.message.clone().into_bytes()?)?;
        slog::debug!(slog_scope::logger(), "signing"; "message_x" => %message.x());

        Ok(Output {
            pub_key: compact::marshal_g2_hex(&pair.public_key),
            signature: compact::marshal_g1_hex(&pair.sign(&message)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs_round_one() {
        let cmd = Cmd::try_parse_from([
            "sign",
            "0x01",
            "0x6c31fc15422ebad28aaf9089c306702f67540b53c7eea8b7d2941044b027100f",
        ])
        .unwrap();
        assert_eq!(
            cmd.output().unwrap(),
            Output {
                pub_key: "1ec5ee94e28cb45e479b9370014fe8a7c7d00bd22effd65a13b504b869d0f564\
                          1bd8489cc5729393c55a04ac8636fc7fb43c67303469eeafda8c3da53a65c17f\
                          18572963edbd82ddfccdffc36b2cb8c63b6710630e094f9cd9d2c790e2542bc4\
                          1d8443aff19f9fd7f0dac59d5d3571ec7d9e48cb550b02218af0323ae28aeb41"
                    .into(),
                signature: "28d4c30eca9525606c99d0ec52f4476ca097f484ac0ec2c50006c646dada6a2b\
                            095dc51808f2c72b0864926de4db025bff344b10110af1ccf09b802f4539f34b"
                    .into(),
            }
        );
    }

    #[test]
    fn serializes_camel_case() {
        let output = Output {
            pub_key: "aa".into(),
            signature: "bb".into(),
        };
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"pubKey":"aa","signature":"bb"}"#
        );
    }
}
