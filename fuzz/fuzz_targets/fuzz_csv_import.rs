#![no_main]

use libfuzzer_sys::fuzz_target;
use map_marker_editor::tabular::{export_registry, import_table};
use map_marker_editor::{read_csv, write_csv, MarkerRegistry, SchemaProfile};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(sheet) = read_csv(text) else {
        return;
    };

    for profile in [SchemaProfile::Import, SchemaProfile::Project] {
        let Ok(table) = import_table(&sheet, profile) else {
            continue;
        };

        // Jede akzeptierte Tabelle muss als Projekt verlustfrei zurücklesbar sein
        let mut registry = MarkerRegistry::new(table.variant.color_mode());
        registry.append_all(table.markers);
        let written = write_csv(&export_registry(&registry)).expect("export must succeed");
        let reread = read_csv(&written).expect("exported CSV must parse");
        let restored = import_table(&reread, SchemaProfile::Project).expect("project must load");
        assert_eq!(restored.markers.as_slice(), registry.markers());
    }
});
