use std::path::Path;

use anyhow::Context;
use wasmtime::component::{Component, HasSelf, Linker};
use wasmtime::{Engine, Store};

wasmtime::component::bindgen!({
    path: "../greeter/wit",
    world: "greeter",
});

/// Store data; backs the `logging` import.
#[derive(Default)]
pub struct HostState {
    log: Vec<String>,
}

impl tinyblink::greeter::logging::Host for HostState {
    fn log(&mut self, msg: String) {
        log::info!("guest: {}", msg);
        self.log.push(msg);
    }
}

/// An instantiated greeter component.
pub struct GreeterRuntime {
    store: Store<HostState>,
    bindings: Greeter,
}

impl GreeterRuntime {
    /// Compile, link and instantiate the component at `path`, then run its
    /// startup routine.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let engine = Engine::default();
        let component = Component::from_file(&engine, path)
            .with_context(|| format!("loading component from {}", path.display()))?;
        Self::instantiate(&engine, &component)
    }

    pub fn instantiate(engine: &Engine, component: &Component) -> anyhow::Result<Self> {
        let mut linker = Linker::new(engine);
        Greeter::add_to_linker::<HostState, HasSelf<HostState>>(&mut linker, |state| state)?;

        let mut store = Store::new(engine, HostState::default());
        let bindings = Greeter::instantiate(&mut store, component, &linker)
            .context("instantiating greeter component")?;

        bindings.call_init(&mut store).context("calling `init`")?;
        log::debug!("greeter instantiated");

        Ok(GreeterRuntime { store, bindings })
    }

    pub fn add(&mut self, a: i32, b: i32) -> anyhow::Result<i32> {
        self.bindings
            .call_add(&mut self.store, a, b)
            .with_context(|| format!("calling `add({}, {})`", a, b))
    }

    pub fn greet(&mut self, name: &str) -> anyhow::Result<String> {
        self.bindings
            .call_greet(&mut self.store, name)
            .with_context(|| format!("calling `greet({:?})`", name))
    }

    /// Lines the guest has logged so far.
    pub fn guest_log(&self) -> &[String] {
        &self.store.data().log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::tinyblink::greeter::logging::Host;

    /// Stand-in for the built greeter: same world, written by hand so the
    /// host path can be exercised without a wasm toolchain.
    const GREETER_WAT: &str = r#"
        (component
            (import "tinyblink:greeter/logging" (instance $logging
                (export "log" (func (param "msg" string)))
            ))

            (core module $Libc
                (memory (export "memory") 1)
                (global $heap (mut i32) (i32.const 1024))
                (func (export "realloc") (param i32 i32 i32 i32) (result i32)
                    (local $ret i32)
                    (local.set $ret
                        (i32.and
                            (i32.add (global.get $heap) (i32.sub (local.get 2) (i32.const 1)))
                            (i32.sub (i32.const 0) (local.get 2))))
                    (global.set $heap (i32.add (local.get $ret) (local.get 3)))
                    (local.get $ret))
            )
            (core instance $libc (instantiate $Libc))

            (core func $log (canon lower (func $logging "log") (memory $libc "memory")))

            (core module $Main
                (import "libc" "memory" (memory 1))
                (import "host" "log" (func $log (param i32 i32)))
                (data (i32.const 0) "tinyblink greeter module loaded!")
                (data (i32.const 64) "Hello, ")
                (func (export "init")
                    (call $log (i32.const 0) (i32.const 32)))
                (func (export "add") (param i32 i32) (result i32)
                    (i32.add (local.get 0) (local.get 1)))
                (func (export "greet") (param $ptr i32) (param $len i32) (result i32)
                    (memory.copy (i32.const 256) (i32.const 64) (i32.const 7))
                    (memory.copy (i32.const 263) (local.get $ptr) (local.get $len))
                    (i32.store8 (i32.add (i32.const 263) (local.get $len)) (i32.const 33))
                    (i32.store (i32.const 128) (i32.const 256))
                    (i32.store (i32.const 132) (i32.add (local.get $len) (i32.const 8)))
                    (i32.const 128))
            )
            (core instance $main (instantiate $Main
                (with "libc" (instance $libc))
                (with "host" (instance (export "log" (func $log))))
            ))

            (func (export "init") (canon lift (core func $main "init")))
            (func (export "add") (param "a" s32) (param "b" s32) (result s32)
                (canon lift (core func $main "add")))
            (func (export "greet") (param "name" string) (result string)
                (canon lift (core func $main "greet")
                    (memory $libc "memory")
                    (realloc (func $libc "realloc"))))
        )
    "#;

    fn runtime() -> GreeterRuntime {
        let engine = Engine::default();
        let component = Component::new(&engine, GREETER_WAT).unwrap();
        GreeterRuntime::instantiate(&engine, &component).unwrap()
    }

    #[test]
    fn instantiate_runs_init_once() {
        let greeter = runtime();
        assert_eq!(greeter.guest_log(), ["tinyblink greeter module loaded!"]);
    }

    #[test]
    fn add_goes_through_the_component() {
        let mut greeter = runtime();

        assert_eq!(greeter.add(2, 3).unwrap(), 5);
        assert_eq!(greeter.add(-5, 5).unwrap(), 0);
        assert_eq!(greeter.add(i32::MAX, 1).unwrap(), i32::MIN);
    }

    #[test]
    fn greet_goes_through_the_component() {
        let mut greeter = runtime();

        assert_eq!(greeter.greet("World").unwrap(), "Hello, World!");
        assert_eq!(greeter.greet("").unwrap(), "Hello, !");
        assert_eq!(greeter.guest_log().len(), 1);
    }

    #[test]
    fn component_missing_an_export_fails_to_instantiate() {
        let engine = Engine::default();
        let component = Component::new(
            &engine,
            r#"(component
                (import "tinyblink:greeter/logging" (instance
                    (export "log" (func (param "msg" string)))
                ))
            )"#,
        )
        .unwrap();

        let err = GreeterRuntime::instantiate(&engine, &component).err().unwrap();
        assert!(format!("{err:#}").contains("instantiating greeter component"));
    }

    #[test]
    fn missing_component_reports_path() {
        let err = GreeterRuntime::load(Path::new("does/not/exist.wasm"))
            .err()
            .expect("loading a missing file must fail");

        assert!(format!("{err:#}").contains("does/not/exist.wasm"));
    }

    #[test]
    fn invalid_bytes_are_rejected() {
        let engine = Engine::default();
        assert!(Component::new(&engine, b"not wasm").is_err());
    }

    #[test]
    fn host_records_guest_log_lines() {
        let mut state = HostState::default();
        state.log("tinyblink greeter module loaded!".to_string());
        state.log("second".to_string());

        assert_eq!(state.log, ["tinyblink greeter module loaded!", "second"]);
    }
}
