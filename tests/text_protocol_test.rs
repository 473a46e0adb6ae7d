use approx::assert_relative_eq;
use bufferless_text::prelude::*;
use bufferless_text::rendering::glyph::{instance_vertices, GlyphCell, CORNERS};
use bufferless_text::rendering::text_encoder::{encode, submit, UniformTarget};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Sampler(GLint, GLint),
    Matrix(GLint, Mat4),
    Int(GLint, GLint),
    Draw { vertices: GLsizei, instances: GLsizei },
}

/// records the protocol instead of talking to a gl context
#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Recorder {
    fn int_writes(&self) -> Vec<(GLint, GLint)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Int(location, value) => Some((*location, *value)),
                _ => None,
            })
            .collect()
    }

    fn draws(&self) -> Vec<(GLsizei, GLsizei)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Draw {
                    vertices,
                    instances,
                } => Some((*vertices, *instances)),
                _ => None,
            })
            .collect()
    }
}

impl UniformTarget for Recorder {
    fn set_sampler(&mut self, location: GLint, unit: GLint) {
        self.calls.push(Call::Sampler(location, unit));
    }

    fn set_mat4(&mut self, location: GLint, matrix: &Mat4) {
        self.calls.push(Call::Matrix(location, *matrix));
    }

    fn set_int(&mut self, location: GLint, value: GLint) {
        self.calls.push(Call::Int(location, value));
    }

    fn draw_strip_instanced(&mut self, vertices: GLsizei, instances: GLsizei) {
        self.calls.push(Call::Draw {
            vertices,
            instances,
        });
    }
}

fn record(message: &str, origin: Vec3, scale: f32) -> Result<Recorder, TextError> {
    let encoded = encode(&TextDrawRequest::uniform(message, origin, scale))?;
    let mut recorder = Recorder::default();
    submit(&encoded, ATLAS_TEXTURE_UNIT, &mut recorder);
    Ok(recorder)
}

#[test]
fn hello_world_is_one_instanced_draw() {
    let recorder = record("Hello World", vec3(-0.5, 0.5, 0.0), 0.2).unwrap();

    assert_eq!(recorder.calls[0], Call::Sampler(0, ATLAS_TEXTURE_UNIT));
    match &recorder.calls[1] {
        Call::Matrix(location, model) => {
            assert_eq!(*location, 1);
            let expected = glm::scale(
                &glm::translate(&Mat4::identity(), &vec3(-0.5, 0.5, 0.0)),
                &vec3(0.2, 0.2, 0.2),
            );
            assert_eq!(*model, expected);
        }
        other => panic!("expected the model matrix, got {other:?}"),
    }
    assert_eq!(recorder.draws(), vec![(4, 11)]);
    assert_eq!(recorder.calls.last(), Some(&Call::Draw { vertices: 4, instances: 11 }));
}

#[test]
fn message_of_length_l_writes_slots_two_to_l_plus_one() {
    let message = "There is room for improvement";
    let recorder = record(message, vec3(-1.0, 0.0, 0.0), 0.1).unwrap();

    let writes = recorder.int_writes();
    assert_eq!(writes.len(), message.len());
    for (i, ((location, value), c)) in writes.iter().zip(message.chars()).enumerate() {
        assert_eq!(*location, 2 + i as GLint);
        assert_eq!(*value, c as GLint);
    }
    let (_, instances) = recorder.draws()[0];
    assert_eq!(instances as usize, message.len());
}

#[test]
fn empty_message_issues_nothing() {
    let recorder = record("", ORIGIN, 1.0).unwrap();
    assert!(recorder.calls.is_empty());
}

#[test]
fn capacity_boundary() {
    let full = "W".repeat(MAX_MESSAGE_LEN);
    let recorder = record(&full, ORIGIN, 0.01).unwrap();
    assert_eq!(recorder.draws(), vec![(4, 100)]);
    assert_eq!(recorder.int_writes().last(), Some(&(101, 'W' as GLint)));

    let overlong = "W".repeat(MAX_MESSAGE_LEN + 1);
    assert_eq!(
        record(&overlong, ORIGIN, 0.01).err(),
        Some(TextError::MessageTooLong {
            len: 101,
            capacity: 100
        })
    );
}

#[test]
fn non_atlas_characters_upload_the_placeholder() {
    let recorder = record("a\tb", ORIGIN, 1.0).unwrap();
    assert_eq!(
        recorder.int_writes(),
        vec![(2, 'a' as GLint), (3, '?' as GLint), (4, 'b' as GLint)]
    );
}

#[test]
fn ab_samples_neighbouring_cells_of_row_three() {
    let encoded = encode(&TextDrawRequest::uniform("AB", ORIGIN, 1.0)).unwrap();
    assert_eq!(encoded.codes, vec![65, 66]);

    let a = GlyphCell::from_code(encoded.codes[0]).unwrap();
    let b = GlyphCell::from_code(encoded.codes[1]).unwrap();
    assert_eq!((a.index(), a.row, a.column), (33, 3, 3));
    assert_eq!((b.index(), b.row, b.column), (34, 3, 4));

    let a_vertices = instance_vertices(0, encoded.codes[0], &encoded.model);
    let b_vertices = instance_vertices(1, encoded.codes[1], &encoded.model);
    assert_relative_eq!(a_vertices[0].uv, glm::vec2(0.36, 0.4), epsilon = 1e-6);
    assert_relative_eq!(b_vertices[0].uv, glm::vec2(0.46, 0.4), epsilon = 1e-6);
    assert_relative_eq!(a_vertices[3].uv, glm::vec2(0.3, 0.3), epsilon = 1e-6);
}

#[test]
fn every_instance_emits_the_corner_table() {
    let encoded = encode(&TextDrawRequest::uniform("Hello", ORIGIN, 1.0)).unwrap();
    for (instance, code) in encoded.codes.iter().enumerate() {
        let vertices = instance_vertices(instance as u32, *code, &encoded.model);
        let left = instance as f32 * 0.6;
        for (vertex, corner) in vertices.iter().zip(CORNERS.iter()) {
            let expected = glm::vec4(left + corner.x * 0.6, corner.y * 1.6, 0.0, 1.0);
            assert_relative_eq!(vertex.position, expected, epsilon = 1e-5);
        }
    }
}

#[test]
fn glyph_spacing_follows_the_text_scale() {
    let encoded = encode(&TextDrawRequest::uniform("ab", vec3(0.25, -1.0, 0.0), 0.05)).unwrap();
    let first = instance_vertices(0, encoded.codes[0], &encoded.model);
    let second = instance_vertices(1, encoded.codes[1], &encoded.model);
    assert_relative_eq!(second[1].position.x - first[1].position.x, 0.03, epsilon = 1e-6);
    assert_relative_eq!(first[1].position.x, 0.25, epsilon = 1e-6);
    assert_relative_eq!(first[3].position.y, -1.0 + 0.08, epsilon = 1e-6);
}
