use tp_platform::{CaptureError, ScreenImage, ScreenInfo, ScreenSource};

use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAPINFO, BITMAPINFOHEADER, BitBlt, CreateCompatibleBitmap, CreateCompatibleDC,
    DIB_RGB_COLORS, DeleteDC, DeleteObject, GetDC, GetDIBits, ReleaseDC, SRCCOPY, SelectObject,
};
use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

/// GDI screen source for the primary display.
///
/// Multi-monitor layout is out of scope; the only screen reported is the
/// primary one, and the active screen is always index 0.
#[derive(Debug, Default)]
pub struct GdiScreenSource;

impl GdiScreenSource {
    pub fn new() -> Self {
        Self
    }
}

impl ScreenSource for GdiScreenSource {
    fn screens(&self) -> Result<Vec<ScreenInfo>, CaptureError> {
        let (width, height) = unsafe {
            (
                GetSystemMetrics(SM_CXSCREEN),
                GetSystemMetrics(SM_CYSCREEN),
            )
        };
        if width <= 0 || height <= 0 {
            return Err(CaptureError::NoScreens);
        }

        Ok(vec![ScreenInfo {
            index: 0,
            x: 0,
            y: 0,
            width,
            height,
        }])
    }

    fn active_screen_index(&self) -> Result<usize, CaptureError> {
        Ok(0)
    }

    fn capture(&mut self, index: usize) -> Result<ScreenImage, CaptureError> {
        if index != 0 {
            return Err(CaptureError::InvalidScreen(index));
        }
        capture_primary_screen()
    }
}

/// Grab the primary screen through GDI: BitBlt into a compatible bitmap,
/// then extract the pixels top-down and convert BGRA to RGBA.
fn capture_primary_screen() -> Result<ScreenImage, CaptureError> {
    unsafe {
        let screen_width = GetSystemMetrics(SM_CXSCREEN);
        let screen_height = GetSystemMetrics(SM_CYSCREEN);
        if screen_width <= 0 || screen_height <= 0 {
            return Err(CaptureError::NoScreens);
        }

        let screen_dc = GetDC(Some(HWND(std::ptr::null_mut())));
        if screen_dc.is_invalid() {
            return Err(CaptureError::Grab("failed to get screen DC".to_string()));
        }

        let mem_dc = CreateCompatibleDC(Some(screen_dc));
        if mem_dc.is_invalid() {
            ReleaseDC(Some(HWND(std::ptr::null_mut())), screen_dc);
            return Err(CaptureError::Grab("failed to create memory DC".to_string()));
        }

        let bitmap = CreateCompatibleBitmap(screen_dc, screen_width, screen_height);
        if bitmap.is_invalid() {
            let _ = DeleteDC(mem_dc);
            ReleaseDC(Some(HWND(std::ptr::null_mut())), screen_dc);
            return Err(CaptureError::Grab("failed to create bitmap".to_string()));
        }

        let old_bitmap = SelectObject(mem_dc, bitmap.into());
        let blt = BitBlt(
            mem_dc,
            0,
            0,
            screen_width,
            screen_height,
            Some(screen_dc),
            0,
            0,
            SRCCOPY,
        );
        SelectObject(mem_dc, old_bitmap);

        if blt.is_err() {
            let _ = DeleteDC(mem_dc);
            ReleaseDC(Some(HWND(std::ptr::null_mut())), screen_dc);
            let _ = DeleteObject(bitmap.into());
            return Err(CaptureError::Grab("BitBlt failed".to_string()));
        }

        let mut bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: screen_width,
                // Negative height: top-down rows.
                biHeight: -screen_height,
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                biSizeImage: 0,
                biXPelsPerMeter: 0,
                biYPelsPerMeter: 0,
                biClrUsed: 0,
                biClrImportant: 0,
            },
            bmiColors: [Default::default(); 1],
        };

        let data_size = (screen_width * screen_height * 4) as usize;
        let mut pixels = vec![0u8; data_size];

        let lines_copied = GetDIBits(
            screen_dc,
            bitmap,
            0,
            screen_height as u32,
            Some(pixels.as_mut_ptr() as *mut std::ffi::c_void),
            &mut bmi,
            DIB_RGB_COLORS,
        );

        let _ = DeleteDC(mem_dc);
        ReleaseDC(Some(HWND(std::ptr::null_mut())), screen_dc);
        let _ = DeleteObject(bitmap.into());

        if lines_copied <= 0 {
            return Err(CaptureError::Grab(
                "failed to extract pixel data from bitmap".to_string(),
            ));
        }

        // GDI hands back BGRA with an undefined alpha channel.
        for px in pixels.chunks_exact_mut(4) {
            px.swap(0, 2);
            px[3] = 255;
        }

        Ok(ScreenImage::new(
            screen_width as u32,
            screen_height as u32,
            pixels,
        ))
    }
}
