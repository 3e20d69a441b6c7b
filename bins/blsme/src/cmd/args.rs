use super::{word_hex, Error};
use bls::{hash_to_point, to_verifier_args, KeyPair, MessageInput, DEFAULT_DOMAIN};
use clap::Parser;
use serde::Serialize;

/// `args` subcommand
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

/// Verifier arguments as 32-byte hex words.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub signature: [String; 2],
    pub pub_key: [String; 4],
    pub message: [String; 2],
}

impl Cmd {
    /// Signs the message and lays out the verifier arguments.
    pub fn output(&self) -> Result<Output, Error> {
        let pair = KeyPair::from_seed(self.secret_seed.as_bytes())?;
        let domain = self.domain.clone().into_bytes()?;
        let message = hash_to_point(&domain, &self.message.clone().into_bytes()?)?;
        let args = to_verifier_args(&pair.public_key, &message, &pair.sign(&message));

        Ok(Output {
            signature: args.signature.each_ref().map(word_hex),
            pub_key: args.public_key.each_ref().map(word_hex),
            message: args.message.each_ref().map(word_hex),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_one_args() {
        let output = Cmd::try_parse_from([
            "args",
            "0x01",
            "0x6c31fc15422ebad28aaf9089c306702f67540b53c7eea8b7d2941044b027100f",
        ])
        .unwrap()
        .output()
        .unwrap();

        assert_eq!(
            output.signature,
            [
                "0x28d4c30eca9525606c99d0ec52f4476ca097f484ac0ec2c50006c646dada6a2b",
                "0x095dc51808f2c72b0864926de4db025bff344b10110af1ccf09b802f4539f34b",
            ]
        );
        assert_eq!(
            output.pub_key,
            [
                "0x1ec5ee94e28cb45e479b9370014fe8a7c7d00bd22effd65a13b504b869d0f564",
                "0x1bd8489cc5729393c55a04ac8636fc7fb43c67303469eeafda8c3da53a65c17f",
                "0x18572963edbd82ddfccdffc36b2cb8c63b6710630e094f9cd9d2c790e2542bc4",
                "0x1d8443aff19f9fd7f0dac59d5d3571ec7d9e48cb550b02218af0323ae28aeb41",
            ]
        );
        assert_eq!(
            output.message,
            [
                "0x1070aa34bbcb5d9c6608cf697b269529dcb9dd9dd588e1c4728225a4cd91d6b0",
                "0x2c2dccebcb360e694d8e210905fbb7a6efa2c1b9ce7f2ae2f4ecd0f6a5edbba5",
            ]
        );
    }
}
