use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use graph_playground::{GenerateParams, Preset};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Number of nodes to generate
    #[arg(long, default_value_t = 3000)]
    pub count: usize,

    /// Probability of linking a node to an earlier one (defaults to the preset's)
    #[arg(long)]
    pub edge_probability: Option<f64>,

    /// Styling and density of the generated graph
    #[arg(long, value_enum, default_value_t = Preset::Sigma)]
    pub preset: Preset,

    /// Link to any earlier node instead of only the previous one
    #[arg(long)]
    pub no_chain: bool,

    /// Seed for reproducible graphs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the generated graph as JSON to this path (`-` for stdout) and exit
    #[arg(long)]
    pub dump: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn generate_params(&self) -> GenerateParams {
        let edge_probability = self
            .edge_probability
            .unwrap_or_else(|| self.preset.default_edge_probability());
        GenerateParams::new(self.count, edge_probability, !self.no_chain).with_preset(self.preset)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_supplies_default_probability() {
        let args = Args::parse_from(["graph-playground", "--preset", "cytoscape"]);
        let params = args.generate_params();

        assert_eq!(params.count, 3000);
        assert_eq!(params.edge_probability, 0.5);
        assert!(params.chain_only);
        assert_eq!(params.preset, Preset::Cytoscape);
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let args = Args::parse_from([
            "graph-playground",
            "--count",
            "12",
            "--edge-probability",
            "0.9",
            "--no-chain",
            "--seed",
            "5",
            "--dump",
            "-",
        ]);
        let params = args.generate_params();

        assert_eq!(params.count, 12);
        assert_eq!(params.edge_probability, 0.9);
        assert!(!params.chain_only);
        assert_eq!(params.preset, Preset::Sigma);
        assert_eq!(args.seed, Some(5));
        assert_eq!(args.dump.as_deref(), Some(std::path::Path::new("-")));
    }
}
