//! Browser 2D canvas backend

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::shapes::{Rect, sprite_rect};
use super::{Canvas, Color};
use crate::error::AssetError;
use crate::sim::ShipSkin;

/// Ship textures, indexed by [`ShipSkin::index`]
pub struct ShipTextures {
    images: [HtmlImageElement; 2],
}

impl ShipTextures {
    /// Load both skins; any failure is fatal to the caller
    pub async fn load() -> Result<Self, AssetError> {
        let classic = load_texture(ShipSkin::Classic.texture_path()).await?;
        let alternate = load_texture(ShipSkin::Alternate.texture_path()).await?;
        Ok(Self {
            images: [classic, alternate],
        })
    }

    fn get(&self, skin: ShipSkin) -> &HtmlImageElement {
        &self.images[skin.index()]
    }
}

/// Load an image and wait until it has decoded
pub async fn load_texture(path: &str) -> Result<HtmlImageElement, AssetError> {
    let err = |reason: String| AssetError::TextureLoad {
        path: path.to_string(),
        reason,
    };

    let image = HtmlImageElement::new().map_err(|e| err(format!("{:?}", e)))?;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(path);
    JsFuture::from(loaded)
        .await
        .map_err(|_| err("image failed to load".to_string()))?;

    if image.natural_width() == 0 {
        return Err(err("image has zero width".to_string()));
    }
    log::info!(
        "Loaded texture {} ({}x{})",
        path,
        image.natural_width(),
        image.natural_height()
    );
    Ok(image)
}

/// [`Canvas`] over a `CanvasRenderingContext2d`
pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
    size: (f64, f64),
    textures: ShipTextures,
}

impl WebCanvas {
    pub fn new(canvas: &HtmlCanvasElement, textures: ShipTextures) -> Result<Self, AssetError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| AssetError::Surface(format!("{:?}", e)))?
            .ok_or_else(|| AssetError::Surface("2d context unsupported".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AssetError::Surface("unexpected context type".to_string()))?;
        ctx.set_text_baseline("top");
        ctx.set_image_smoothing_enabled(true);

        Ok(Self {
            ctx,
            size: (canvas.width() as f64, canvas.height() as f64),
            textures,
        })
    }
}

impl Canvas for WebCanvas {
    fn clear(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(0.0, 0.0, self.size.0, self.size.1);
    }

    fn polygon_outline(&mut self, points: &[Vec2], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn sprite(&mut self, skin: ShipSkin, center: Vec2, width: f32) {
        let image = self.textures.get(skin);
        let size = Vec2::new(image.natural_width() as f32, image.natural_height() as f32);
        let dst = sprite_rect(center, width, size);
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            dst.x as f64,
            dst.y as f64,
            dst.w as f64,
            dst.h as f64,
        ) {
            log::warn!("Sprite draw failed: {:?}", e);
        }
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.ctx.set_font(&format!("{}px monospace", size));
        self.ctx.set_fill_style_str(&color.css());
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("Text draw failed: {:?}", e);
        }
    }
}
