use sango::{ByteRange, HttpClient, SegmentScanner};

use crate::hls::{setup_mock_server, PlaylistMock};

#[tokio::test]
async fn master_with_two_variants_groups_segments_by_variant() -> anyhow::Result<()> {
    let data = include_str!("../fixtures/hls/master-two-variants.m3u8");
    let (uri, server) = setup_mock_server(data).await;

    let variant = include_str!("../fixtures/hls/variant-three-segments.m3u8");
    server
        .mock("/gear1/prog_index.m3u8", variant)
        .await
        .mock("/gear2/prog_index.m3u8", variant)
        .await;

    let scanner = SegmentScanner::new(HttpClient::default());
    let segments = scanner.scan(&uri).await?;

    // two variants of three segments each, grouped by variant in discovery
    // order, file order within each variant
    assert_eq!(segments.len(), 6);
    for segment in &segments[..3] {
        assert_eq!(segment.playlist_url, uri);
        assert_eq!(segment.stream_name, "gear1/prog_index.m3u8");
        assert_eq!(
            segment.stream_url,
            format!("{}/gear1/prog_index.m3u8", server.uri())
        );
        assert!(segment.byte_range.is_none());
    }
    assert_eq!(
        segments[0].segment_url,
        format!("{}/gear1/fileSequence0.ts", server.uri())
    );
    assert_eq!(
        segments[2].segment_url,
        format!("{}/gear1/fileSequence2.ts", server.uri())
    );
    assert_eq!(segments[3].stream_name, "gear2/prog_index.m3u8");
    assert_eq!(
        segments[5].segment_url,
        format!("{}/gear2/fileSequence2.ts", server.uri())
    );

    Ok(())
}

#[tokio::test]
async fn master_discovers_alternate_renditions_and_iframe_streams() -> anyhow::Result<()> {
    let data = include_str!("../fixtures/hls/master-with-media.m3u8");
    let (uri, server) = setup_mock_server(data).await;

    let variant = include_str!("../fixtures/hls/variant-three-segments.m3u8");
    server
        .mock("/audio/prog_index.m3u8", variant)
        .await
        .mock("/video/prog_index.m3u8", variant)
        .await
        .mock("/iframe/prog_index.m3u8", variant)
        .await;

    let scanner = SegmentScanner::new(HttpClient::default());
    let segments = scanner.scan(&uri).await?;

    assert_eq!(segments.len(), 9);
    assert_eq!(segments[0].stream_name, "audio/prog_index.m3u8");
    assert_eq!(segments[3].stream_name, "video/prog_index.m3u8");
    assert_eq!(segments[6].stream_name, "iframe/prog_index.m3u8");

    Ok(())
}

#[tokio::test]
async fn single_rendition_playlist_is_its_own_variant() -> anyhow::Result<()> {
    let data = include_str!("../fixtures/hls/variant-three-segments.m3u8");
    let (uri, server) = setup_mock_server(data).await;

    let scanner = SegmentScanner::new(HttpClient::default());
    let segments = scanner.scan(&uri).await?;

    assert_eq!(segments.len(), 3);
    for segment in &segments {
        assert_eq!(segment.playlist_url, uri);
        assert_eq!(segment.stream_name, "");
        assert_eq!(segment.stream_url, uri);
    }
    assert_eq!(
        segments[0].segment_url,
        format!("{}/fileSequence0.ts", server.uri())
    );

    Ok(())
}

#[tokio::test]
async fn byte_range_attaches_to_the_following_segment_only() -> anyhow::Result<()> {
    let data = include_str!("../fixtures/hls/byte-range.m3u8");
    let (uri, _server) = setup_mock_server(data).await;

    let scanner = SegmentScanner::new(HttpClient::default());
    let segments = scanner.scan(&uri).await?;

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].byte_range, Some(ByteRange::new(2304880, 44744)));
    assert_eq!(segments[1].byte_range, None);

    Ok(())
}

#[tokio::test]
async fn map_uri_becomes_an_initialization_segment() -> anyhow::Result<()> {
    let data = include_str!("../fixtures/hls/fmp4-init.m3u8");
    let (uri, server) = setup_mock_server(data).await;

    let scanner = SegmentScanner::new(HttpClient::default());
    let segments = scanner.scan(&uri).await?;

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].segment_name, "init.mp4");
    assert_eq!(segments[0].segment_url, format!("{}/init.mp4", server.uri()));
    assert_eq!(segments[1].segment_name, "fileSequence0.fmp4");
    assert_eq!(segments[2].segment_name, "fileSequence1.fmp4");

    Ok(())
}

#[tokio::test]
async fn unavailable_segments_are_skipped_without_error() -> anyhow::Result<()> {
    let data = include_str!("../fixtures/hls/missing-segments.m3u8");
    let (uri, _server) = setup_mock_server(data).await;

    let scanner = SegmentScanner::new(HttpClient::default());
    let segments = scanner.scan(&uri).await?;

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].segment_name, "segment100.ts");
    assert_eq!(segments[1].segment_name, "segment102.ts");

    Ok(())
}
