//! Kernel fbdev structures and ioctl wrappers (`linux/fb.h`).

use std::fs::File;
use std::os::fd::AsRawFd;

use libc::c_ulong;

const FBIOGET_VSCREENINFO: u32 = 0x4600;
const FBIOGET_FSCREENINFO: u32 = 0x4602;

/// Position and width of one color channel inside a pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FbBitfield {
    pub offset: u32,
    pub length: u32,
    pub msb_right: u32,
}

/// `struct fb_var_screeninfo`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FbVarScreenInfo {
    pub xres: u32,
    pub yres: u32,
    pub xres_virtual: u32,
    pub yres_virtual: u32,
    pub xoffset: u32,
    pub yoffset: u32,
    pub bits_per_pixel: u32,
    pub grayscale: u32,
    pub red: FbBitfield,
    pub green: FbBitfield,
    pub blue: FbBitfield,
    pub transp: FbBitfield,
    pub nonstd: u32,
    pub activate: u32,
    pub height: u32,
    pub width: u32,
    pub accel_flags: u32,
    pub pixclock: u32,
    pub left_margin: u32,
    pub right_margin: u32,
    pub upper_margin: u32,
    pub lower_margin: u32,
    pub hsync_len: u32,
    pub vsync_len: u32,
    pub sync: u32,
    pub vmode: u32,
    pub rotate: u32,
    pub colorspace: u32,
    pub reserved: [u32; 4],
}

/// `struct fb_fix_screeninfo`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FbFixScreenInfo {
    pub id: [u8; 16],
    pub smem_start: c_ulong,
    pub smem_len: u32,
    pub type_: u32,
    pub type_aux: u32,
    pub visual: u32,
    pub xpanstep: u16,
    pub ypanstep: u16,
    pub ywrapstep: u16,
    pub line_length: u32,
    pub mmio_start: c_ulong,
    pub mmio_len: u32,
    pub accel: u32,
    pub capabilities: u16,
    pub reserved: [u16; 2],
}

impl FbFixScreenInfo {
    /// Driver identification string.
    pub fn id(&self) -> String {
        let end = self.id.iter().position(|&b| b == 0).unwrap_or(self.id.len());
        String::from_utf8_lossy(&self.id[..end]).into_owned()
    }
}

nix::ioctl_read_bad!(fbioget_vscreeninfo, FBIOGET_VSCREENINFO, FbVarScreenInfo);
nix::ioctl_read_bad!(fbioget_fscreeninfo, FBIOGET_FSCREENINFO, FbFixScreenInfo);

/// Queries the variable screen information (resolution, depth, layout).
pub fn var_screen_info(file: &File) -> nix::Result<FbVarScreenInfo> {
    let mut info = FbVarScreenInfo::default();
    // SAFETY: the descriptor is open for the duration of the call and `info`
    // matches the kernel's `fb_var_screeninfo` layout.
    unsafe { fbioget_vscreeninfo(file.as_raw_fd(), &mut info) }?;
    Ok(info)
}

/// Queries the fixed screen information (memory size, line stride).
pub fn fix_screen_info(file: &File) -> nix::Result<FbFixScreenInfo> {
    let mut info = FbFixScreenInfo::default();
    // SAFETY: as above, for `fb_fix_screeninfo`.
    unsafe { fbioget_fscreeninfo(file.as_raw_fd(), &mut info) }?;
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn var_screen_info_matches_kernel_size() {
        assert_eq!(std::mem::size_of::<FbVarScreenInfo>(), 160);
    }

    #[test]
    fn fix_screen_info_matches_kernel_size() {
        #[cfg(target_pointer_width = "64")]
        assert_eq!(std::mem::size_of::<FbFixScreenInfo>(), 80);
        #[cfg(target_pointer_width = "32")]
        assert_eq!(std::mem::size_of::<FbFixScreenInfo>(), 68);
    }

    #[test]
    fn id_stops_at_nul() {
        let mut info = FbFixScreenInfo::default();
        info.id[..7].copy_from_slice(b"simple\0");
        assert_eq!(info.id(), "simple");
    }

    #[test]
    fn ioctl_on_regular_file_fails() {
        let file = tempfile::tempfile().unwrap();
        assert!(var_screen_info(&file).is_err());
        assert!(fix_screen_info(&file).is_err());
    }
}
