//! Integration tests for the reverse-engine consumer contract

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

use morphtag_core::{
    EngineError, EngineResult, EngineSession, NativeTag, ReverseConverter, ReverseEngine,
    TagConverter, TargetMarker,
};

/// Engine answering from a table built by forward-converting known tags
#[derive(Default)]
struct TableEngine {
    table: HashMap<Vec<String>, Vec<String>>,
    live: AtomicUsize,
    opened: AtomicUsize,
}

impl TableEngine {
    fn from_tags(tags: &[&str]) -> Self {
        let converter = TagConverter::builtin().unwrap();
        let mut table: HashMap<Vec<String>, Vec<String>> = HashMap::new();
        for tag in tags {
            let markers = converter
                .convert(tag)
                .unwrap()
                .into_iter()
                .map(|m| m.to_string())
                .collect();
            table.entry(markers).or_default().push(tag.to_string());
        }
        Self {
            table,
            ..Default::default()
        }
    }
}

impl ReverseEngine for TableEngine {
    type Handle = Option<Vec<String>>;

    fn create(&self) -> EngineResult<Self::Handle> {
        self.live.fetch_add(1, Ordering::SeqCst);
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }

    fn convert(&self, handle: &mut Self::Handle, markers: &[&str]) -> EngineResult<usize> {
        if markers.is_empty() {
            return Err(EngineError::Convert("no markers".to_string()));
        }
        let key: Vec<String> = markers.iter().map(|m| m.to_string()).collect();
        let variants = self.table.get(&key).cloned().unwrap_or_default();
        let count = variants.len();
        *handle = Some(variants);
        Ok(count)
    }

    fn fetch(&self, handle: &Self::Handle, index: usize) -> EngineResult<String> {
        let variants = handle.as_ref().ok_or(EngineError::FetchOutOfRange { index, count: 0 })?;
        variants.get(index).cloned().ok_or(EngineError::FetchOutOfRange {
            index,
            count: variants.len(),
        })
    }

    fn destroy(&self, _handle: Self::Handle) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

fn markers(items: &[&str]) -> Vec<TargetMarker> {
    items.iter().copied().map(TargetMarker::from).collect()
}

#[test]
fn test_reverse_returns_every_native_variant() {
    // genitive and partitive collapse onto the same target markers
    let engine = TableEngine::from_tags(&["S@ЕД@МУЖ@РОД@НЕОД", "S@ЕД@МУЖ@ПАРТ@НЕОД", "PART"]);
    let converter = ReverseConverter::new(engine);

    let tags = converter
        .convert(&markers(&["NOUN", "sing", "masc", "gent", "inan"]))
        .unwrap();
    assert_eq!(
        tags,
        [
            NativeTag::new("S@ЕД@МУЖ@РОД@НЕОД"),
            NativeTag::new("S@ЕД@МУЖ@ПАРТ@НЕОД")
        ]
    );

    let tags = converter.convert(&markers(&["PRCL"])).unwrap();
    assert_eq!(tags, [NativeTag::new("PART")]);
    assert_eq!(converter.engine().live.load(Ordering::SeqCst), 0);
}

#[test]
fn test_engine_error_still_releases_handle() {
    let converter = ReverseConverter::new(TableEngine::default());
    let err = converter.convert(&[]).unwrap_err();

    assert!(matches!(err, EngineError::Convert(_)));
    assert_eq!(converter.engine().opened.load(Ordering::SeqCst), 1);
    assert_eq!(converter.engine().live.load(Ordering::SeqCst), 0);
}

#[test]
fn test_session_rejects_out_of_range_fetch() {
    let engine = TableEngine::from_tags(&["PART"]);
    let mut session = EngineSession::open(&engine).unwrap();
    let count = session.submit(&markers(&["PRCL"])).unwrap();

    assert_eq!(count, 1);
    let err = session.variant(count).unwrap_err();
    assert_eq!(err.to_string(), "variant index 1 out of range (count 1)");
}

#[test]
fn test_session_released_on_unwind() {
    let engine = TableEngine::from_tags(&["PART"]);

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut session = EngineSession::open(&engine).unwrap();
        session.submit(&markers(&["PRCL"])).unwrap();
        assert_eq!(engine.live.load(Ordering::SeqCst), 1);
        panic!("consumer failed mid-session");
    }));

    assert!(result.is_err());
    assert_eq!(engine.live.load(Ordering::SeqCst), 0);
}
