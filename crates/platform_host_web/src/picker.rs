//! Hidden-input archive picker returning the chosen file's bytes.

#[cfg(target_arch = "wasm32")]
use futures::channel::oneshot;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug, Clone, PartialEq)]
/// A file chosen through the browser picker.
pub struct PickedFile {
    /// File name as reported by the browser.
    pub name: String,
    /// File size in bytes.
    pub size: u64,
    /// Full file contents.
    pub bytes: Vec<u8>,
}

/// Opens the browser file picker filtered to `.zip` archives and reads the
/// chosen file fully into memory.
///
/// # Errors
///
/// Returns an error when the picker cannot be created, the user cancels,
/// or the file read fails. On non-wasm targets this always errors.
pub async fn pick_archive_file() -> Result<PickedFile, String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err("archive picking is only available when compiled for wasm32".to_string())
    }

    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "document unavailable".to_string())?;
        let input = document
            .create_element("input")
            .map_err(|err| format!("failed to create file input: {err:?}"))?
            .dyn_into::<web_sys::HtmlInputElement>()
            .map_err(|_| "failed to cast file input".to_string())?;
        input.set_type("file");
        input.set_accept(".zip,application/zip");
        input.set_hidden(true);

        if let Some(body) = document.body() {
            let _ = body.append_child(&input);
        }

        let (tx, rx) = oneshot::channel::<Result<web_sys::File, String>>();
        let sender = Rc::new(RefCell::new(Some(tx)));
        let input_for_change = input.clone();
        let change_sender = sender.clone();
        let on_change = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
            let result = input_for_change
                .files()
                .and_then(|files| files.get(0))
                .ok_or_else(|| "no archive selected".to_string());
            if let Some(tx) = change_sender.borrow_mut().take() {
                let _ = tx.send(result);
            }
        }));
        input.set_onchange(Some(on_change.as_ref().unchecked_ref()));
        input.click();

        let file = rx
            .await
            .map_err(|_| "archive picker was cancelled".to_string())??;
        input.remove();
        on_change.forget();

        let bytes = read_file_bytes(&file).await?;
        Ok(PickedFile {
            name: file.name(),
            size: file.size() as u64,
            bytes,
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let reader = web_sys::FileReader::new().map_err(|err| format!("{err:?}"))?;
    let (tx, rx) = oneshot::channel::<Result<Vec<u8>, String>>();
    let sender = Rc::new(RefCell::new(Some(tx)));

    let reader_for_load = reader.clone();
    let load_sender = sender.clone();
    let on_load = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        let result = reader_for_load
            .result()
            .map_err(|err| format!("failed to read archive: {err:?}"))
            .map(|value| js_sys::Uint8Array::new(&value).to_vec());
        if let Some(tx) = load_sender.borrow_mut().take() {
            let _ = tx.send(result);
        }
    }));
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));

    let error_sender = sender.clone();
    let on_error = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        if let Some(tx) = error_sender.borrow_mut().take() {
            let _ = tx.send(Err("failed to load archive file".to_string()));
        }
    }));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    reader
        .read_as_array_buffer(file)
        .map_err(|err| format!("failed to start archive read: {err:?}"))?;

    let result = rx
        .await
        .map_err(|_| "archive read was interrupted".to_string())?;
    on_load.forget();
    on_error.forget();
    result
}
