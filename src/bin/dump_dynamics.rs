use biodivine_lib_wt_bn::WTNetwork;

/// Dump the synchronous transition graph of a network loaded from a pair of
/// node/edge files given on the command line. Transitions go to stdout as
/// `index -> index` lines (canonical state space indices), fixed points are
/// listed afterwards. Extra progress info on stderr...
fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: dump-dynamics <nodes-file> <edges-file>");
        std::process::exit(1);
    }

    let network = match WTNetwork::try_from_files(&args[1], &args[2]) {
        Ok(network) => network,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(2);
        }
    };

    eprintln!("Network loaded: {} nodes.", network.num_nodes());
    let space = network.state_space();
    println!("States: {}", space.state_count());

    for state in space.states() {
        let next = network.update(&state).unwrap();
        println!(
            "{} -> {}",
            space.encode(&state).unwrap(),
            space.encode(&next).unwrap()
        );
    }

    for fixed in network.fixed_points() {
        println!("Fixed point: {}", fixed);
    }
}
