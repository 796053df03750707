use async_trait::async_trait;
use rust_webxr_hit_test_api::utils;
use rust_webxr_hit_test_api::{convert_ray_origin_to_screen_coordinates, XRCoordinateSystem, XRFrameOfReference,
                              XRFrameOfReferenceResolver, XRFrameOfReferenceType, XRHitResult, XRHitTestConfig,
                              XRHitTestError, XRHitTestProvider, XRHitTester, XRViewport};
use std::sync::{Arc, RwLock};

/// Brokers hit tests between callers working in their own frame of reference
/// and a provider that only understands screen coordinates.
///
/// Requests share nothing mutable but the viewport, which is read once per
/// request, so any number of them may be in flight at the same time.
pub struct XRHitTestSession {
    provider: Arc<dyn XRHitTestProvider>,
    resolver: Arc<dyn XRFrameOfReferenceResolver>,
    config: XRHitTestConfig,
    viewport: RwLock<XRViewport>,
}

impl XRHitTestSession {
    pub fn new(provider: Arc<dyn XRHitTestProvider>,
               resolver: Arc<dyn XRFrameOfReferenceResolver>,
               config: XRHitTestConfig,
               viewport: XRViewport)
               -> Result<XRHitTestSession, XRHitTestError> {
        config.validate()?;
        Ok(XRHitTestSession {
            provider,
            resolver,
            config,
            viewport: RwLock::new(viewport),
        })
    }

    pub fn config(&self) -> &XRHitTestConfig {
        &self.config
    }

    pub fn viewport(&self) -> XRViewport {
        match self.viewport.read() {
            Ok(viewport) => *viewport,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Updates the viewport, e.g. after a rotation. Requests already past
    /// projection keep the viewport they sampled.
    pub fn set_viewport(&self, viewport: XRViewport) {
        match self.viewport.write() {
            Ok(mut current) => *current = viewport,
            Err(poisoned) => *poisoned.into_inner() = viewport,
        }
    }

    pub async fn request_frame_of_reference(&self, kind: &XRFrameOfReferenceType)
                                            -> Result<XRFrameOfReference, XRHitTestError> {
        let frame = self.resolver.resolve(kind).await.map_err(|msg| {
            error!("Error resolving frame of reference {}: {}", kind, msg);
            XRHitTestError::FrameResolutionFailure(format!("{}: {}", kind, msg))
        })?;
        if !frame.transform().is_finite() {
            error!("Frame of reference {} resolved to a non-finite transform", kind);
            return Err(XRHitTestError::FrameResolutionFailure(format!("{}: non-finite transform", kind)));
        }
        Ok(frame)
    }

    // Returns true, and logs, when the two samples are too far apart to describe one instant.
    fn check_sample_skew(&self, request_id: u32, native: &XRFrameOfReference, requested: &XRFrameOfReference) -> bool {
        let skew = (native.timestamp() - requested.timestamp()).abs();
        if skew > self.config.max_sample_skew_ms {
            warn!("Hit test {}: {} and {} were sampled {:.1}ms apart, results may be stale",
                  request_id, native.kind(), requested.kind(), skew);
            return true;
        }
        false
    }
}

#[async_trait]
impl XRHitTester for XRHitTestSession {
    async fn request_hit_test(&self,
                              origin: [f32; 3],
                              direction: [f32; 3],
                              coordinate_system: &XRFrameOfReference)
                              -> Result<Vec<XRHitResult>, XRHitTestError> {
        let request_id = utils::new_id();

        // The provider only casts rays from the screen, so only the frame tied to it is accepted.
        if *coordinate_system.kind() != XRFrameOfReferenceType::HeadModel {
            debug!("Hit test {}: rejecting {} coordinate system", request_id, coordinate_system.kind());
            return Err(XRHitTestError::UnsupportedCoordinateSystem(format!(
                "only {} hit testing is supported, got {}",
                XRFrameOfReferenceType::HeadModel, coordinate_system.kind())));
        }

        let viewport = self.viewport();
        let point = convert_ray_origin_to_screen_coordinates(&origin, self.config.near, self.config.fov, viewport)?;
        debug!("Hit test {}: origin {:?} (direction {:?} unused) -> screen ({}, {}) in {}x{}",
               request_id, origin, direction, point.x, point.y, viewport.width, viewport.height);
        if !point.is_on_screen() {
            debug!("Hit test {}: ray lies outside the visible frustum, expecting no hits", request_id);
        }

        let hits = self.provider.perform_hit_test(point.x, point.y, self.config.mode).await.map_err(|msg| {
            error!("Error testing for hits: {}", msg);
            XRHitTestError::ProviderFailure(msg)
        })?;
        if let Some(bad) = hits.iter().position(|hit| !hit.world_transform.is_finite()) {
            error!("Hit test {}: provider returned a non-finite pose at index {}", request_id, bad);
            return Err(XRHitTestError::ProviderFailure(format!("non-finite pose for hit {}", bad)));
        }
        debug!("Hit test {}: provider returned {} hit(s)", request_id, hits.len());
        if hits.is_empty() {
            return Ok(Vec::new());
        }

        // Hits come back in the provider's tracking frame, which is assumed to be the configured
        // native frame rather than queried from the provider.
        let native = self.request_frame_of_reference(&self.config.native_frame).await?;
        self.check_sample_skew(request_id, &native, coordinate_system);
        let native_to_requested = native.get_transform_to(coordinate_system);

        let results: Vec<XRHitResult> = hits.into_iter()
            .map(|hit| XRHitResult::from_raw(hit, &native_to_requested))
            .collect();
        for result in &results {
            trace!("Hit test {}: {:?} at {:?} orientation {:?}", request_id, result.hit_type,
                   result.hit_matrix.position(), result.hit_matrix.orientation());
        }
        Ok(results)
    }
}
