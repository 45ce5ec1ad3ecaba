#![no_main]

use keygraph::{Graph, GraphDto, ImportConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(dto) = GraphDto::from_slice(data) {
        let lenient = Graph::from_dto(&dto);
        if let Ok(strict) = Graph::<i64>::try_from_dto(&dto, &ImportConfig::strict()) {
            assert_eq!(strict.edge_count(), lenient.edge_count());
        }
    }
});
