//! C FFI bindings for antigate.
//!
//! Provides a simple blocking API for the Anti-Captcha service from C, Python, Go, etc.
//!
//! # Example (C)
//!
//! ```c
//! #include "antigate.h"
//!
//! int main() {
//!     AntiGateResult result = antigate_solve_recaptcha("client_key", "https://example.com", "site_key");
//!     if (result.error_code == 0) {
//!         printf("Token: %s\n", result.solution);
//!     }
//!     antigate_free_result(result);
//!     return 0;
//! }
//! ```

use std::ffi::{c_char, CStr, CString};
use std::future::Future;
use std::ptr;

use crate::{AntiGate, ImageToTextTask, Task};

/// Result structure returned by solve functions.
///
/// All string fields are heap-allocated and must be freed with `antigate_free_result`.
#[repr(C)]
pub struct AntiGateResult {
    /// 0 = success, non-zero = error
    pub error_code: i32,
    /// Error message if error_code != 0, NULL otherwise
    pub error_message: *mut c_char,
    /// Solved text or token. Empty if the task was still processing.
    pub solution: *mut c_char,
}

impl AntiGateResult {
    fn success(solution: String) -> Self {
        Self {
            error_code: 0,
            error_message: ptr::null_mut(),
            solution: string_to_ptr(solution),
        }
    }

    fn error(code: i32, message: String) -> Self {
        Self {
            error_code: code,
            error_message: string_to_ptr(message),
            solution: ptr::null_mut(),
        }
    }
}

/// Balance lookup result. `error_message` must be freed with `antigate_free_string`.
#[repr(C)]
pub struct AntiGateBalance {
    /// 0 = success, non-zero = error
    pub error_code: i32,
    pub error_message: *mut c_char,
    pub balance: f64,
}

/// Convert Rust String to C string pointer.
fn string_to_ptr(s: String) -> *mut c_char {
    CString::new(s)
        .map(|cs| cs.into_raw())
        .unwrap_or(ptr::null_mut())
}

/// Convert C string to Rust String, returns None if null or invalid UTF-8.
unsafe fn ptr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Run a future to completion on a throwaway runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map(|runtime| runtime.block_on(future))
        .map_err(|e| format!("Failed to create runtime: {}", e))
}

/// Build a client and solve `task` (blocking).
fn solve_blocking(client_key: String, task: Task) -> AntiGateResult {
    let client = match AntiGate::builder(client_key).build() {
        Ok(c) => c,
        Err(e) => return AntiGateResult::error(5, format!("Failed to build client: {}", e)),
    };

    match block_on(client.solve(task)) {
        Ok(Ok(solution)) => AntiGateResult::success(solution),
        Ok(Err(e)) => AntiGateResult::error(6, format!("Solve failed: {}", e)),
        Err(e) => AntiGateResult::error(4, e),
    }
}

/// Solve a proxyless reCAPTCHA v2 (blocking, up to about 210 seconds).
///
/// # Parameters
///
/// - `client_key`: Anti-Captcha account key (required)
/// - `website_url`: Page the captcha appears on (required)
/// - `website_key`: reCAPTCHA site key (required)
///
/// # Returns
///
/// An `AntiGateResult` struct. Check `error_code` for success (0) or failure (non-zero).
/// The caller must free the result with `antigate_free_result`.
///
/// # Safety
///
/// - `client_key`, `website_url` and `website_key` must be valid null-terminated C strings
#[no_mangle]
pub unsafe extern "C" fn antigate_solve_recaptcha(
    client_key: *const c_char,
    website_url: *const c_char,
    website_key: *const c_char,
) -> AntiGateResult {
    let client_key = match ptr_to_string(client_key) {
        Some(s) if !s.is_empty() => s,
        _ => return AntiGateResult::error(1, "client_key is required".to_string()),
    };

    let website_url = match ptr_to_string(website_url) {
        Some(s) if !s.is_empty() => s,
        _ => return AntiGateResult::error(2, "website_url is required".to_string()),
    };

    let website_key = match ptr_to_string(website_key) {
        Some(s) if !s.is_empty() => s,
        _ => return AntiGateResult::error(3, "website_key is required".to_string()),
    };

    solve_blocking(client_key, Task::recaptcha(website_url, website_key))
}

/// Recognize a base64 encoded captcha image (blocking).
///
/// # Safety
///
/// - `client_key` and `image_base64` must be valid null-terminated C strings
#[no_mangle]
pub unsafe extern "C" fn antigate_solve_image(
    client_key: *const c_char,
    image_base64: *const c_char,
) -> AntiGateResult {
    let client_key = match ptr_to_string(client_key) {
        Some(s) if !s.is_empty() => s,
        _ => return AntiGateResult::error(1, "client_key is required".to_string()),
    };

    let body = match ptr_to_string(image_base64) {
        Some(s) if !s.is_empty() => s,
        _ => return AntiGateResult::error(2, "image_base64 is required".to_string()),
    };

    solve_blocking(client_key, ImageToTextTask::from_base64(body).into())
}

/// Solve a proxyless reCAPTCHA v2 and return JSON (blocking).
///
/// # Returns
///
/// A JSON string on success:
/// ```json
/// {"success": true, "solution": "..."}
/// ```
///
/// Or on error:
/// ```json
/// {"success": false, "error": "error message"}
/// ```
///
/// The caller must free the string with `antigate_free_string`.
///
/// # Safety
///
/// Same requirements as `antigate_solve_recaptcha`.
#[no_mangle]
pub unsafe extern "C" fn antigate_solve_json(
    client_key: *const c_char,
    website_url: *const c_char,
    website_key: *const c_char,
) -> *mut c_char {
    let result = antigate_solve_recaptcha(client_key, website_url, website_key);

    let json = if result.error_code == 0 {
        let solution = ptr_to_string(result.solution).unwrap_or_default();
        antigate_free_result(result);

        serde_json::json!({ "success": true, "solution": solution }).to_string()
    } else {
        let error =
            ptr_to_string(result.error_message).unwrap_or_else(|| "Unknown error".to_string());
        antigate_free_result(result);

        serde_json::json!({ "success": false, "error": error }).to_string()
    };

    string_to_ptr(json)
}

/// Look up the account balance (blocking).
///
/// # Safety
///
/// - `client_key` must be a valid null-terminated C string
#[no_mangle]
pub unsafe extern "C" fn antigate_balance(client_key: *const c_char) -> AntiGateBalance {
    let failed = |code: i32, message: String| AntiGateBalance {
        error_code: code,
        error_message: string_to_ptr(message),
        balance: 0.0,
    };

    let client_key = match ptr_to_string(client_key) {
        Some(s) if !s.is_empty() => s,
        _ => return failed(1, "client_key is required".to_string()),
    };

    let client = match AntiGate::builder(client_key).build() {
        Ok(c) => c,
        Err(e) => return failed(5, format!("Failed to build client: {}", e)),
    };

    match block_on(client.balance()) {
        Ok(Ok(balance)) => AntiGateBalance {
            error_code: 0,
            error_message: ptr::null_mut(),
            balance,
        },
        Ok(Err(e)) => failed(6, format!("Balance lookup failed: {}", e)),
        Err(e) => failed(4, e),
    }
}

/// Free an AntiGateResult structure.
///
/// # Safety
///
/// - `result` must be a valid AntiGateResult previously returned by antigate
/// - Each result must only be freed once
#[no_mangle]
pub unsafe extern "C" fn antigate_free_result(result: AntiGateResult) {
    if !result.error_message.is_null() {
        let _ = CString::from_raw(result.error_message);
    }
    if !result.solution.is_null() {
        let _ = CString::from_raw(result.solution);
    }
}

/// Free a string returned by antigate FFI functions.
///
/// # Safety
///
/// - `s` must be NULL or a valid pointer previously returned by antigate
/// - Each string must only be freed once
#[no_mangle]
pub unsafe extern "C" fn antigate_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}

/// Get the library version.
///
/// # Returns
///
/// A static string with the version number. Do NOT free this string.
#[no_mangle]
pub extern "C" fn antigate_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
