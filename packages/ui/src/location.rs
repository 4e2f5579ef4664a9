//! Platform location provider.
//!
//! Returns the [`registration::LocationProvider`] for the current platform:
//! - **Web** (WASM + `web` feature): `navigator.geolocation` via [`BrowserLocator`]
//! - **Desktop** (native): no location capability, every request answers
//!   [`registration::LocationError::Unsupported`]

use registration::LocationProvider;

/// Create the platform-appropriate location provider.
pub fn make_locator() -> impl LocationProvider {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        browser::BrowserLocator
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        registration::FixedLocator::unsupported()
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserLocator;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser {
    use registration::{Coordinate, LocationError, LocationProvider};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{GeolocationPosition, GeolocationPositionError};

    /// Single-shot `getCurrentPosition` bridged into a future.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserLocator;

    impl LocationProvider for BrowserLocator {
        async fn current_position(&self) -> Result<Coordinate, LocationError> {
            let navigator = web_sys::window()
                .ok_or(LocationError::Unsupported)?
                .navigator();
            let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("geolocation"))
                .unwrap_or(false);
            if !supported {
                return Err(LocationError::Unsupported);
            }
            let geolocation = navigator
                .geolocation()
                .map_err(|_| LocationError::Unsupported)?;

            let promise = js_sys::Promise::new(&mut |resolve, reject| {
                if let Err(e) =
                    geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
                {
                    let _ = reject.call1(&JsValue::UNDEFINED, &e);
                }
            });
            let position: GeolocationPosition = JsFuture::from(promise)
                .await
                .map_err(position_error)?
                .unchecked_into();
            let coords = position.coords();
            Ok(Coordinate::new(coords.latitude(), coords.longitude()))
        }
    }

    fn position_error(value: JsValue) -> LocationError {
        match value.dyn_into::<GeolocationPositionError>() {
            Ok(err) => match err.code() {
                GeolocationPositionError::PERMISSION_DENIED => LocationError::PermissionDenied,
                GeolocationPositionError::TIMEOUT => LocationError::Timeout,
                _ => LocationError::Unavailable,
            },
            Err(_) => LocationError::Unavailable,
        }
    }
}
