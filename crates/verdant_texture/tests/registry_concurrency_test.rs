//! # Registry Concurrency Tests
//!
//! Many threads racing for the same texture must produce exactly one
//! registration; different names must all land.

use std::collections::HashMap;
use std::sync::{mpsc, Arc, Barrier};
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use verdant_texture::{BitmapSink, Color, EngineError, TextureError, TextureRegistry};

/// Counts registrations per name, optionally refusing one name.
#[derive(Default)]
struct TallySink {
    calls: Mutex<HashMap<String, usize>>,
    refuse: Option<String>,
}

impl BitmapSink for TallySink {
    fn is_registered(&self, name: &str) -> bool {
        self.calls.lock().contains_key(name)
    }

    fn register_bitmap(
        &self,
        name: &str,
        pixels: &[i32],
        width: u32,
        height: u32,
    ) -> Result<(), EngineError> {
        if self.refuse.as_deref() == Some(name) {
            return Err(format!("no room for {name}").into());
        }
        assert_eq!(pixels.len(), width as usize * height as usize);
        *self.calls.lock().entry(name.to_owned()).or_insert(0) += 1;
        Ok(())
    }
}

/// Test: 16 threads asking for the same box register it once.
#[test]
fn test_same_name_registers_once() {
    let registry = Arc::new(TextureRegistry::new(TallySink::default()));
    let barrier = Arc::new(Barrier::new(16));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.ensure_box(256, 128).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "box_256_128");
    }
    assert_eq!(registry.sink().calls.lock().get("box_256_128"), Some(&1));
}

/// Test: Distinct names from many threads all register exactly once.
#[test]
fn test_distinct_names_all_register() {
    let registry = Arc::new(TextureRegistry::new(TallySink::default()));

    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let name = format!("tile_{i}");
                for _ in 0..4 {
                    registry
                        .ensure_noise(&name, 16, 16, Color::rgb(i * 20, 100, 50), 0.03)
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let calls = registry.sink().calls.lock();
    assert_eq!(calls.len(), 8);
    assert!(calls.values().all(|&count| count == 1));
}

/// Test: Engine failures propagate and leave the name retryable.
#[test]
fn test_engine_failure_propagates() {
    let sink = TallySink {
        refuse: Some("lava".to_owned()),
        ..TallySink::default()
    };
    let registry = TextureRegistry::new(sink);

    let result = registry.ensure_noise("lava", 8, 8, Color::rgb(255, 60, 0), 0.05);
    match result {
        Err(TextureError::Engine { name, source }) => {
            assert_eq!(name, "lava");
            assert!(source.to_string().contains("no room"));
        }
        other => panic!("expected engine error, got {other:?}"),
    }
    assert!(!registry.contains("lava"));
    assert!(registry.registered_names().is_empty());

    // Other names are unaffected
    assert!(registry.ensure_box(32, 32).is_ok());
}

/// Test: Noise tiles are reproducible from the registry seed.
#[test]
fn test_noise_depends_only_on_seed_and_name() {
    #[derive(Default)]
    struct Capture(Mutex<HashMap<String, Vec<i32>>>);

    impl BitmapSink for Capture {
        fn is_registered(&self, name: &str) -> bool {
            self.0.lock().contains_key(name)
        }

        fn register_bitmap(
            &self,
            name: &str,
            pixels: &[i32],
            _width: u32,
            _height: u32,
        ) -> Result<(), EngineError> {
            self.0.lock().insert(name.to_owned(), pixels.to_vec());
            Ok(())
        }
    }

    let seed = verdant_texture::TextureSeed::new(99);
    let first = TextureRegistry::with_seed(Capture::default(), seed);
    let second = TextureRegistry::with_seed(Capture::default(), seed);

    // Different registration order, same tiles
    first.ensure_noise("grass", 16, 16, Color::rgb(67, 141, 13), 0.03).unwrap();
    first.ensure_noise("sand", 16, 16, Color::rgb(220, 196, 126), 0.02).unwrap();
    second.ensure_noise("sand", 16, 16, Color::rgb(220, 196, 126), 0.02).unwrap();
    second.ensure_noise("grass", 16, 16, Color::rgb(67, 141, 13), 0.03).unwrap();

    let a = first.sink().0.lock();
    let b = second.sink().0.lock();
    assert_eq!(a.get("grass"), b.get("grass"));
    assert_eq!(a.get("sand"), b.get("sand"));
}

/// Holds one name inside `register_bitmap` until released.
struct GateSink {
    gated: &'static str,
    entered: Mutex<mpsc::Sender<()>>,
    release: Mutex<mpsc::Receiver<()>>,
    names: Mutex<Vec<String>>,
}

impl BitmapSink for GateSink {
    fn is_registered(&self, name: &str) -> bool {
        self.names.lock().iter().any(|n| n == name)
    }

    fn register_bitmap(
        &self,
        name: &str,
        _pixels: &[i32],
        _width: u32,
        _height: u32,
    ) -> Result<(), EngineError> {
        if name == self.gated {
            self.entered.lock().send(()).unwrap();
            self.release.lock().recv().unwrap();
        }
        self.names.lock().push(name.to_owned());
        Ok(())
    }
}

/// Test: Queries and new names proceed while another name is mid-registration.
#[test]
fn test_slow_registration_blocks_nobody_else() {
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let registry = Arc::new(TextureRegistry::new(GateSink {
        gated: "box_64_64",
        entered: Mutex::new(entered_tx),
        release: Mutex::new(release_rx),
        names: Mutex::new(Vec::new()),
    }));

    let slow = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || registry.ensure_box(64, 64))
    };
    entered_rx.recv_timeout(Duration::from_secs(5)).unwrap();

    // Query first, then two new names, all while box_64_64 is held
    let (done_tx, done_rx) = mpsc::channel();
    let others = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            let names = registry.registered_names();
            let pending = registry.contains("box_64_64");
            let small = registry.ensure_box(16, 16).unwrap();
            let medium = registry.ensure_box(32, 32).unwrap();
            done_tx.send((names, pending, small, medium)).unwrap();
        })
    };

    let outcome = done_rx.recv_timeout(Duration::from_secs(5));
    release_tx.send(()).unwrap();
    let (names, pending, small, medium) =
        outcome.expect("distinct names waited on box_64_64");

    assert!(names.is_empty());
    assert!(!pending);
    assert_eq!((small.as_str(), medium.as_str()), ("box_16_16", "box_32_32"));

    others.join().unwrap();
    assert_eq!(slow.join().unwrap().unwrap(), "box_64_64");
    assert_eq!(
        registry.registered_names(),
        vec!["box_16_16", "box_32_32", "box_64_64"]
    );
}
