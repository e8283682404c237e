use rowbot::players::greedy::Greedy;
use rowbot::protocol::decoder::Decoder;

fn main() -> anyhow::Result<()> {
    rowbot::log();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Decoder::new(Greedy::new()).run(stdin.lock(), stdout.lock())
}
