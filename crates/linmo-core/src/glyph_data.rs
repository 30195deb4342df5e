//! Built-in stroke data: simple hanzi with hand-placed polylines, enough for
//! the practice corpus and for running without a downloaded glyph set.
//! Points live in the glyph unit square, y growing downward.

type Stroke = &'static [[f32; 2]];

pub(crate) const BASIC: &[(char, &[Stroke])] = &[
    ('一', &[&[[0.10, 0.50], [0.90, 0.50]]]),
    (
        '二',
        &[
            &[[0.15, 0.35], [0.85, 0.35]],
            &[[0.10, 0.68], [0.90, 0.68]],
        ],
    ),
    (
        '三',
        &[
            &[[0.15, 0.28], [0.85, 0.28]],
            &[[0.18, 0.50], [0.82, 0.50]],
            &[[0.10, 0.74], [0.90, 0.74]],
        ],
    ),
    (
        '十',
        &[
            &[[0.10, 0.50], [0.90, 0.50]],
            &[[0.50, 0.10], [0.50, 0.90]],
        ],
    ),
    (
        '工',
        &[
            &[[0.15, 0.25], [0.85, 0.25]],
            &[[0.50, 0.25], [0.50, 0.75]],
            &[[0.10, 0.75], [0.90, 0.75]],
        ],
    ),
    (
        '土',
        &[
            &[[0.20, 0.35], [0.80, 0.35]],
            &[[0.50, 0.12], [0.50, 0.78]],
            &[[0.10, 0.78], [0.90, 0.78]],
        ],
    ),
    (
        '王',
        &[
            &[[0.15, 0.22], [0.85, 0.22]],
            &[[0.20, 0.50], [0.80, 0.50]],
            &[[0.50, 0.22], [0.50, 0.80]],
            &[[0.10, 0.80], [0.90, 0.80]],
        ],
    ),
    (
        '口',
        &[
            &[[0.22, 0.22], [0.22, 0.78]],
            &[[0.22, 0.22], [0.78, 0.22], [0.78, 0.78]],
            &[[0.22, 0.78], [0.78, 0.78]],
        ],
    ),
    (
        '日',
        &[
            &[[0.28, 0.15], [0.28, 0.85]],
            &[[0.28, 0.15], [0.72, 0.15], [0.72, 0.85]],
            &[[0.28, 0.50], [0.72, 0.50]],
            &[[0.28, 0.85], [0.72, 0.85]],
        ],
    ),
    (
        '中',
        &[
            &[[0.25, 0.30], [0.25, 0.62]],
            &[[0.25, 0.30], [0.75, 0.30], [0.75, 0.62]],
            &[[0.25, 0.62], [0.75, 0.62]],
            &[[0.50, 0.10], [0.50, 0.90]],
        ],
    ),
    (
        '山',
        &[
            &[[0.50, 0.12], [0.50, 0.72]],
            &[[0.15, 0.38], [0.15, 0.78], [0.85, 0.78]],
            &[[0.85, 0.38], [0.85, 0.78]],
        ],
    ),
    (
        '川',
        &[
            &[[0.22, 0.15], [0.18, 0.55], [0.12, 0.85]],
            &[[0.50, 0.12], [0.50, 0.85]],
            &[[0.82, 0.12], [0.82, 0.88]],
        ],
    ),
    (
        '人',
        &[
            &[[0.50, 0.12], [0.42, 0.40], [0.25, 0.68], [0.12, 0.86]],
            &[[0.47, 0.38], [0.62, 0.62], [0.85, 0.86]],
        ],
    ),
    (
        '大',
        &[
            &[[0.12, 0.42], [0.88, 0.42]],
            &[[0.50, 0.10], [0.42, 0.45], [0.25, 0.70], [0.12, 0.88]],
            &[[0.52, 0.48], [0.66, 0.66], [0.88, 0.88]],
        ],
    ),
    (
        '木',
        &[
            &[[0.10, 0.38], [0.90, 0.38]],
            &[[0.50, 0.10], [0.50, 0.88]],
            &[[0.46, 0.42], [0.32, 0.62], [0.14, 0.80]],
            &[[0.54, 0.42], [0.68, 0.62], [0.86, 0.80]],
        ],
    ),
];
