use adventure_chunk::app::AdventureChunkApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = AdventureChunkApp::parse();
    match args.run() {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("failed running adventure-chunk: {e}");
            std::process::exit(1);
        }
    }
}
