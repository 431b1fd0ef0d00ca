//! WASM entry point, mounted by Trunk.

fn main() {
	// The app only runs in the browser; the native build of this binary is
	// a no-op so `cargo test` works on the host.
	#[cfg(target_arch = "wasm32")]
	yew::Renderer::<sozo_web::App>::new().render();
}
