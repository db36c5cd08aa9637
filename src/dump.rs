use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use graph_playground::Graph;

pub fn write_graph_json(graph: &Graph, path: &Path) -> Result<()> {
    if path == Path::new("-") {
        let stdout = io::stdout();
        return write_to(graph, stdout.lock()).context("failed to write graph to stdout");
    }

    let file = File::create(path)
        .with_context(|| format!("failed to create dump file {}", path.display()))?;
    write_to(graph, BufWriter::new(file))
        .with_context(|| format!("failed to write graph to {}", path.display()))?;

    info!(path:?, nodes = graph.node_count(), edges = graph.edge_count(); "Wrote graph dump");
    Ok(())
}

fn write_to<W: Write>(graph: &Graph, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, graph).context("failed to serialize graph")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
