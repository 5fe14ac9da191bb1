use quadtree::QuadTree;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> quadtree::Result<()> {
    // Logs go to stderr, so the printed tree stays alone on stdout
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        )
        .init();

    let values = [100, 50, 150, 90, 45, 5, 250, 1, 100, 111, 89];
    let tree = QuadTree::construct(values);
    tree.print()?;

    let counts = tree.counts();
    tracing::info!(
        root = counts.root,
        much_smaller = counts.much_smaller,
        smaller = counts.smaller,
        bigger = counts.bigger,
        much_bigger = counts.much_bigger,
        "bucket counts"
    );
    Ok(())
}
