//! Test fixture generators
//!
//! Extractor output for small, hand-checked dataflow programs.

use flowgraph_ir::ExtractionInput;

use super::builders::{ChainBuilder, InputBuilder};

pub const LEADER_STREAM: &str = "Stream<u32, Process<'a, Leader>, Unbounded>";
pub const ACCEPTOR_STREAM: &str = "Stream<u32, Cluster<'a, Acceptor>, Unbounded, NoOrder>";
pub const ACCEPTOR_TICK_BATCH: &str =
    "Stream<u32, Tick<Cluster<'a, Acceptor>>, Bounded, NoOrder>";
pub const ACCEPTOR_TICK_SINGLETON: &str = "Singleton<u32, Tick<Cluster<'a, Acceptor>>, Bounded>";

/// Two functions, one network hop, one tick scope, one skipped call.
///
/// ```text
/// fn leader() {                                         // lines 1-20
///     let ballots = leader.source_iter(..).map(..).send_bincode(&acceptors);   // 3
///     let batch = ballots.batch(&tick, ..).fold(..);                           // 5
///     batch.all_ticks().for_each(..);                                          // 7
/// }
/// fn main() {                                           // lines 30-40
///     p.source_iter(..).to_string().for_each(..);                              // 32
/// }
/// ```
///
/// Nodes, in id order: source_iter, map, send_bincode, batch, fold,
/// all_ticks, for_each, source_iter, for_each.
pub fn fixture_paxos_leader() -> ExtractionInput {
    InputBuilder::new("examples/paxos.rs")
        .function("leader", 1, 20)
        .function("main", 30, 40)
        .bind(
            "ballots",
            ChainBuilder::at(3)
                .typed("source_iter", LEADER_STREAM)
                .typed("map", LEADER_STREAM)
                .typed("send_bincode", ACCEPTOR_STREAM),
        )
        .bind(
            "batch",
            ChainBuilder::at(5)
                .typed("batch", ACCEPTOR_TICK_BATCH)
                .tick("&tick")
                .text("ballots.batch(&tick, nondet!(/** test */))")
                .typed("fold", ACCEPTOR_TICK_SINGLETON),
        )
        .standalone(
            ChainBuilder::at(7)
                .typed("all_ticks", ACCEPTOR_STREAM)
                .text("batch.all_ticks()")
                .typed("for_each", "()"),
        )
        .standalone(
            ChainBuilder::at(32)
                .op("source_iter")
                .op("to_string")
                .typed("for_each", "()"),
        )
        .build()
}

/// A helper function whose only chain is one binding
pub fn fixture_single_binding() -> ExtractionInput {
    InputBuilder::new("src/helper.rs")
        .function("helper", 1, 10)
        .bind(
            "numbers",
            ChainBuilder::at(2)
                .typed("source_iter", LEADER_STREAM)
                .typed("map", LEADER_STREAM),
        )
        .build()
}

/// `n` bindings in one function, each reading the previous one
pub fn fixture_linear_bindings(n: usize) -> ExtractionInput {
    let mut builder = InputBuilder::new("src/generated.rs").function("generated", 1, 10 * n as u32 + 10);
    for i in 0..n {
        let line = 2 + 2 * i as u32;
        let chain = if i == 0 {
            ChainBuilder::at(line).op("source_iter").op("map")
        } else {
            ChainBuilder::at(line)
                .op("filter")
                .text(&format!("v{}.filter(|x| *x > 0)", i - 1))
                .op("map")
        };
        builder = builder.bind(&format!("v{}", i), chain);
    }
    builder.build()
}

/// Same document as `fixture_paxos_leader`, as the extractor's JSON
pub fn fixture_paxos_leader_json() -> String {
    serde_json::to_string(&fixture_paxos_leader()).expect("fixture serializes")
}
