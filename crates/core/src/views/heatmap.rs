use alloc_heatmap_protocol::RenderCommand;

use crate::config::HeatmapConfig;
use crate::model::AllocationSnapshot;
use crate::scale::ColorScale;

/// Render a snapshot as a wrapped grid of cells.
///
/// Emits one `DrawRect` per sample, in index order, inside a group named
/// after the config's container. An empty snapshot yields the group and
/// nothing else.
pub fn render_heatmap(
    snapshot: &AllocationSnapshot,
    config: &HeatmapConfig,
    scale: &ColorScale,
) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(snapshot.len() + 2);

    commands.push(RenderCommand::BeginGroup {
        id: config.container.clone(),
    });

    for (pos, value) in snapshot.cells(config.column_size) {
        commands.push(RenderCommand::DrawRect {
            rect: config.cell_rect(pos),
            fill: scale.map(value),
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc_heatmap_protocol::{Color, Rect};
    use std::collections::HashSet;

    fn rects(cmds: &[RenderCommand]) -> Vec<(Rect, Color)> {
        cmds.iter()
            .filter_map(RenderCommand::as_rect)
            .map(|(r, c)| (*r, *c))
            .collect()
    }

    #[test]
    fn three_samples_on_first_row() {
        let snap = AllocationSnapshot::new(vec![0.0, 1.0, 0.5]);
        let cmds = render_heatmap(&snap, &HeatmapConfig::default(), &ColorScale::default());
        assert_eq!(
            rects(&cmds),
            vec![
                (Rect::new(0.0, 0.0, 7.0, 7.0), Color::WHITE),
                (Rect::new(8.0, 0.0, 7.0, 7.0), Color::GREEN),
                (Rect::new(16.0, 0.0, 7.0, 7.0), Color::rgb(128, 192, 128)),
            ]
        );
    }

    #[test]
    fn empty_snapshot_draws_nothing() {
        let cmds = render_heatmap(
            &AllocationSnapshot::default(),
            &HeatmapConfig::default(),
            &ColorScale::default(),
        );
        assert!(rects(&cmds).is_empty());
        assert_eq!(cmds.len(), 2);
    }

    #[test]
    fn one_rect_per_sample_at_unique_positions() {
        let n = 1000;
        let samples: Vec<f64> = (0..n).map(|i| f64::from(i) / f64::from(n)).collect();
        let snap = AllocationSnapshot::new(samples);
        let cmds = render_heatmap(&snap, &HeatmapConfig::default(), &ColorScale::default());
        let drawn = rects(&cmds);
        assert_eq!(drawn.len(), n as usize);

        let mut seen = HashSet::new();
        for (i, (rect, _)) in drawn.iter().enumerate() {
            let column = (rect.x / 8.0) as usize;
            let row = (rect.y / 8.0) as usize;
            assert_eq!(column, i % 128);
            assert_eq!(row, i / 128);
            assert!(seen.insert((row, column)));
        }
    }

    #[test]
    fn partial_last_row_starts_at_column_zero() {
        let snap = AllocationSnapshot::new(vec![0.3; 128 * 2 + 5]);
        let cmds = render_heatmap(&snap, &HeatmapConfig::default(), &ColorScale::default());
        let last_row: Vec<_> = rects(&cmds)
            .into_iter()
            .filter(|(r, _)| r.y == 16.0)
            .map(|(r, _)| r.x)
            .collect();
        assert_eq!(last_row, vec![0.0, 8.0, 16.0, 24.0, 32.0]);
    }

    #[test]
    fn honours_custom_columns() {
        let cfg = HeatmapConfig {
            column_size: 2,
            ..Default::default()
        };
        let snap = AllocationSnapshot::new(vec![0.0, 0.0, 0.0]);
        let drawn = rects(&render_heatmap(&snap, &cfg, &ColorScale::default()));
        assert_eq!(drawn[2].0, Rect::new(0.0, 8.0, 7.0, 7.0));
    }
}
