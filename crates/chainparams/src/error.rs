use trbod_consensus::Network;
use trbod_pow::genesis::GenesisError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    UnknownNetwork(String),
    NotSelected,
    NotUnitTest(Network),
    Genesis { network: Network, error: GenesisError },
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamsError::UnknownNetwork(name) => write!(f, "unknown network '{name}'"),
            ParamsError::NotSelected => write!(f, "no network has been selected"),
            ParamsError::NotUnitTest(network) => write!(
                f,
                "parameters of network '{network}' cannot be modified (only unittest can)"
            ),
            ParamsError::Genesis { network, error } => {
                write!(f, "{network} genesis block failed verification: {error}")
            }
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Genesis { error, .. } => Some(error),
            _ => None,
        }
    }
}
