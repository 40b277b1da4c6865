use sdl2::{self, Sdl, VideoSubsystem};
use sdl2::video::{Window, GLContext, GLProfile, SwapInterval};
use gl;
use gx;

/// The window and its GL context. Everything here is set up once and only
/// torn down when the process exits.
pub struct Platform {
    pub sdl: Sdl,
    pub video: VideoSubsystem,
    pub window: Window,
    pub gl_context: GLContext,
}

impl Platform {
    pub fn new(name: &str, w: u32, h: u32) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video = sdl.video()?;
        {
            let gl_attr = video.gl_attr();
            gl_attr.set_context_profile(GLProfile::Core);
            gl_attr.set_context_flags().debug().set();
        }
        let window = video.window(name, w, h)
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| format!("Failed to create window: {}", e))?;

        let gl_context = window.gl_create_context()?;
        window.gl_set_context_to_current()?;

        gl::load_with(|s| video.gl_get_proc_address(s) as _);
        unsafe {
            gx::init(&video);
        }
        video.gl_set_swap_interval(SwapInterval::LateSwapTearing);

        Ok(Self { sdl, video, window, gl_context })
    }
    pub fn clear_draw(&self) {
        unsafe {
            gl::ClearColor(0., 0., 0., 1.);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
    pub fn present(&self) {
        self.window.gl_swap_window();
    }
}
