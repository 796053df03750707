use rust_webxr_hit_test::api::{MockHitTestCall, MockXRBackend, MockXRState};
use rust_webxr_hit_test::mock::MockXRControlMsg;
use rust_webxr_hit_test::*;
use std::sync::Arc;
use std::time::Duration;

const EPSILON: f32 = 1e-5;
const NEAR: f64 = 0.1;
const FOV: f64 = 0.7853981633974483;

fn session(backend: &MockXRBackend, config: XRHitTestConfig, viewport: XRViewport) -> XRHitTestSession {
    XRHitTestSession::new(Arc::new(backend.provider()), Arc::new(backend.resolver()), config, viewport)
        .expect("valid config")
}

fn default_session(backend: &MockXRBackend) -> XRHitTestSession {
    session(backend, XRHitTestConfig::default(), XRViewport::new(100, 100))
}

fn head_model() -> XRFrameOfReference {
    XRFrameOfReference::new(XRFrameOfReferenceType::HeadModel, XRTransform::identity())
}

fn plane_hit(z: f32) -> XRRawHit {
    XRRawHit::new(XRTransform::from_translation(0.0, 0.0, z), XRHitType::ExistingPlane).with_distance(-z)
}

fn half_extent() -> f32 {
    (NEAR * (FOV / 2.0).tan()) as f32
}

#[tokio::test]
async fn identity_frames_leave_hits_untouched() {
    let backend = MockXRBackend::new();
    backend.handle_msg(MockXRControlMsg::SetHits(vec![
        XRRawHit::new(XRTransform::identity(), XRHitType::ExistingPlane),
    ]));
    let session = default_session(&backend);

    let results = session.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &head_model()).await.unwrap();

    assert_eq!(results.len(), 1);
    assert!(results[0].hit_matrix.is_identity(EPSILON));
    assert_eq!(backend.hit_test_calls(), vec![MockHitTestCall {
        screen_x: 0.0,
        screen_y: 0.0,
        mode: XRHitTestMode::ExistingPlanes,
    }]);
    assert_eq!(backend.resolve_calls(), vec![XRFrameOfReferenceType::EyeLevel]);
}

#[tokio::test]
async fn no_hits_skips_frame_resolution() {
    let backend = MockXRBackend::new();
    let session = default_session(&backend);

    let results = session.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &head_model()).await.unwrap();

    assert!(results.is_empty());
    assert_eq!(backend.hit_test_calls().len(), 1);
    assert!(backend.resolve_calls().is_empty());
}

#[tokio::test]
async fn other_coordinate_systems_are_rejected_before_the_provider() {
    let backend = MockXRBackend::new();
    backend.handle_msg(MockXRControlMsg::SetHits(vec![plane_hit(-1.0)]));
    let session = default_session(&backend);

    for kind in vec![XRFrameOfReferenceType::EyeLevel,
                     XRFrameOfReferenceType::Stage,
                     XRFrameOfReferenceType::Tracker,
                     XRFrameOfReferenceType::from("anchor-1")] {
        let frame = XRFrameOfReference::new(kind, XRTransform::identity());
        match session.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &frame).await {
            Err(XRHitTestError::UnsupportedCoordinateSystem(_)) => {}
            other => panic!("expected UnsupportedCoordinateSystem, got {:?}", other),
        }
    }
    assert!(backend.hit_test_calls().is_empty());
    assert!(backend.resolve_calls().is_empty());
}

#[tokio::test]
async fn provider_failure_is_not_an_empty_list() {
    let backend = MockXRBackend::new();
    backend.handle_msg(MockXRControlMsg::SetHits(vec![plane_hit(-1.0)]));
    backend.handle_msg(MockXRControlMsg::FailHitTests("bridge unavailable".into()));
    let session = default_session(&backend);

    match session.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &head_model()).await {
        Err(XRHitTestError::ProviderFailure(reason)) => assert!(reason.contains("bridge unavailable")),
        other => panic!("expected ProviderFailure, got {:?}", other),
    }
    // No retries
    assert_eq!(backend.hit_test_calls().len(), 1);
    assert!(backend.resolve_calls().is_empty());

    backend.handle_msg(MockXRControlMsg::ClearFailure);
    let results = session.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &head_model()).await.unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn frame_resolution_failure_returns_no_partial_results() {
    let backend = MockXRBackend::new();
    backend.handle_msg(MockXRControlMsg::SetHits(vec![plane_hit(-1.0), plane_hit(-2.0)]));
    backend.handle_msg(MockXRControlMsg::RemoveFrame(XRFrameOfReferenceType::EyeLevel));
    let session = default_session(&backend);

    match session.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &head_model()).await {
        Err(XRHitTestError::FrameResolutionFailure(reason)) => assert!(reason.contains("eye-level")),
        other => panic!("expected FrameResolutionFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn results_keep_provider_order() {
    let backend = MockXRBackend::new();
    let h1 = plane_hit(-1.0).with_anchor("near-plane");
    let h2 = plane_hit(-3.0).with_anchor("far-plane");
    backend.handle_msg(MockXRControlMsg::SetHits(vec![h1, h2]));
    let session = default_session(&backend);

    let results = session.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &head_model()).await.unwrap();

    let anchors: Vec<_> = results.iter().map(|r| r.anchor_id.clone().unwrap()).collect();
    assert_eq!(anchors, vec!["near-plane".to_owned(), "far-plane".to_owned()]);
    assert_eq!(results[0].distance, Some(1.0));
    assert_eq!(results[1].distance, Some(3.0));
}

#[tokio::test]
async fn hits_are_re_expressed_in_the_requested_frame() {
    let backend = MockXRBackend::new();
    backend.handle_msg(MockXRControlMsg::SetFrameTransform(XRFrameOfReferenceType::EyeLevel,
                                                           XRTransform::from_translation(0.0, 1.5, 0.0)));
    backend.handle_msg(MockXRControlMsg::SetFrameTransform(XRFrameOfReferenceType::HeadModel,
                                                           XRTransform::from_translation(0.0, 1.6, 0.0)));
    backend.handle_msg(MockXRControlMsg::SetHits(vec![plane_hit(-1.0)]));
    let session = default_session(&backend);

    let head = session.request_frame_of_reference(&XRFrameOfReferenceType::HeadModel).await.unwrap();
    let results = session.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &head).await.unwrap();

    // world · (head⁻¹ · eye-level)
    let expected = XRTransform::from_translation(0.0, -0.1, -1.0);
    assert!(results[0].hit_matrix.approx_eq(&expected, EPSILON), "{:?}", results[0].hit_matrix);
    assert_eq!(results[0].hit_type, XRHitType::ExistingPlane);
}

#[tokio::test]
async fn existing_planes_mode_filters_estimated_surfaces() {
    let backend = MockXRBackend::new();
    backend.handle_msg(MockXRControlMsg::SetHits(vec![
        XRRawHit::new(XRTransform::from_translation(0.0, 0.0, -0.5), XRHitType::FeaturePoint),
        plane_hit(-1.0),
        XRRawHit::new(XRTransform::from_translation(0.0, 0.0, -2.0), XRHitType::EstimatedHorizontalPlane),
    ]));

    let planes_only = default_session(&backend);
    let results = planes_only.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &head_model()).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].hit_type, XRHitType::ExistingPlane);

    let any_surface = session(&backend,
                              XRHitTestConfig::default().with_mode(XRHitTestMode::AnySurface),
                              XRViewport::new(100, 100));
    let results = any_surface.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &head_model()).await.unwrap();
    let types: Vec<_> = results.iter().map(|r| r.hit_type).collect();
    assert_eq!(types, vec![XRHitType::FeaturePoint, XRHitType::ExistingPlane, XRHitType::EstimatedHorizontalPlane]);

    let modes: Vec<_> = backend.hit_test_calls().iter().map(|call| call.mode).collect();
    assert_eq!(modes, vec![XRHitTestMode::ExistingPlanes, XRHitTestMode::AnySurface]);
}

#[tokio::test]
async fn provider_receives_aspect_corrected_screen_coordinates() {
    let backend = MockXRBackend::new();
    let session = session(&backend, XRHitTestConfig::default(), XRViewport::new(100, 200));
    let origin = [half_extent() * 0.5, half_extent() * 0.25, 0.0];

    session.request_hit_test(origin, [0.0, 0.0, -1.0], &head_model()).await.unwrap();
    session.set_viewport(XRViewport::new(200, 100));
    session.request_hit_test(origin, [0.0, 0.0, -1.0], &head_model()).await.unwrap();

    let calls = backend.hit_test_calls();
    assert!((calls[0].screen_x - 1.0).abs() < EPSILON && (calls[0].screen_y - 0.25).abs() < EPSILON);
    assert!((calls[1].screen_x - 0.5).abs() < EPSILON && (calls[1].screen_y - 0.5).abs() < EPSILON);
}

#[tokio::test]
async fn empty_viewport_is_an_invalid_argument() {
    let backend = MockXRBackend::new();
    let session = session(&backend, XRHitTestConfig::default(), XRViewport::new(0, 0));

    match session.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &head_model()).await {
        Err(XRHitTestError::InvalidArgument(_)) => {}
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    assert!(backend.hit_test_calls().is_empty());
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let backend = MockXRBackend::new();
    let result = XRHitTestSession::new(Arc::new(backend.provider()),
                                       Arc::new(backend.resolver()),
                                       XRHitTestConfig::default().with_fov(0.0),
                                       XRViewport::new(100, 100));
    match result {
        Err(XRHitTestError::InvalidArgument(_)) => {}
        Err(other) => panic!("expected InvalidArgument, got {:?}", other),
        Ok(_) => panic!("expected InvalidArgument, got a session"),
    }
}

#[tokio::test]
async fn non_finite_provider_pose_fails_the_whole_request() {
    let backend = MockXRBackend::new();
    let mut broken = [0f32; 16];
    broken[0] = std::f32::NAN;
    backend.handle_msg(MockXRControlMsg::SetHits(vec![
        plane_hit(-1.0),
        XRRawHit::new(XRTransform::from_matrix(broken), XRHitType::ExistingPlane),
    ]));
    let session = default_session(&backend);

    match session.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &head_model()).await {
        Err(XRHitTestError::ProviderFailure(_)) => {}
        other => panic!("expected ProviderFailure, got {:?}", other),
    }
}

async fn wait_for_pending(backend: &MockXRBackend, count: usize) {
    for _ in 0..1000 {
        if backend.pending_calls().len() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    panic!("provider calls never arrived");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_requests_do_not_share_results() {
    let backend = MockXRBackend::new();
    backend.handle_msg(MockXRControlMsg::SetFrameTransform(XRFrameOfReferenceType::EyeLevel,
                                                           XRTransform::from_translation(0.0, 1.5, 0.0)));
    backend.handle_msg(MockXRControlMsg::SetFrameTransform(XRFrameOfReferenceType::HeadModel,
                                                           XRTransform::from_translation(0.0, 1.6, 0.0)));
    backend.handle_msg(MockXRControlMsg::DeferHitTests(true));
    let session = Arc::new(default_session(&backend));
    let head = session.request_frame_of_reference(&XRFrameOfReferenceType::HeadModel).await.unwrap();

    let (s1, f1) = (session.clone(), head.clone());
    let center = tokio::spawn(async move {
        s1.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &f1).await
    });
    let (s2, f2) = (session.clone(), head.clone());
    let offset = [half_extent() * 0.5, 0.0, 0.0];
    let right = tokio::spawn(async move {
        s2.request_hit_test(offset, [0.0, 0.0, -1.0], &f2).await
    });

    wait_for_pending(&backend, 2).await;

    // Answer the later-looking request first.
    let right_index = backend.pending_calls().iter().position(|call| call.screen_x > 0.25).unwrap();
    assert!(backend.resolve_pending(right_index, Ok(vec![plane_hit(-2.0)])));
    assert!(backend.resolve_pending(0, Ok(vec![plane_hit(-1.0)])));

    let right = right.await.unwrap().unwrap();
    let center = center.await.unwrap().unwrap();
    assert!(center[0].hit_matrix.approx_eq(&XRTransform::from_translation(0.0, -0.1, -1.0), EPSILON));
    assert!(right[0].hit_matrix.approx_eq(&XRTransform::from_translation(0.0, -0.1, -2.0), EPSILON));
}

#[tokio::test]
async fn dropped_pending_call_is_a_provider_failure() {
    let backend = MockXRBackend::new();
    backend.handle_msg(MockXRControlMsg::DeferHitTests(true));
    let session = Arc::new(default_session(&backend));

    let s = session.clone();
    let request = tokio::spawn(async move {
        s.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &head_model()).await
    });
    wait_for_pending(&backend, 1).await;
    // Replacing the mock state drops the held resolver.
    *backend.state_handle().lock().unwrap() = MockXRState::default();

    match request.await.unwrap() {
        Err(XRHitTestError::ProviderFailure(_)) => {}
        other => panic!("expected ProviderFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn remote_control_messages_reach_the_backend() {
    let (backend, remote) = MockXRBackend::new_with_remote();
    remote.send(MockXRControlMsg::SetHits(vec![plane_hit(-1.0)])).unwrap();
    let session = default_session(&backend);

    for _ in 0..1000 {
        let results = session.request_hit_test([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], &head_model()).await.unwrap();
        if !results.is_empty() {
            assert!(results[0].hit_matrix.approx_eq(&XRTransform::from_translation(0.0, 0.0, -1.0), EPSILON));
            return;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    panic!("remote message never applied");
}
