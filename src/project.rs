use crate::object::{GameObject, ObjType, PropValue};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Project-wide display and engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectConfig {
    /// Scene width in scene units
    pub width: f32,

    /// Scene height in scene units
    pub height: f32,

    /// Physics mode tag, e.g. "arcade"
    pub physics: String,

    /// Nearest-neighbour scaling for crisp pixels
    pub pixel_art: bool,

    /// Canvas background as a hex string
    pub background_color: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            physics: "arcade".to_string(),
            pixel_art: true,
            background_color: "#1a1a2e".to_string(),
        }
    }
}

/// A named container of game objects plus an opaque code blob.
///
/// Object order is z-order: the front-most object is last.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    pub id: Ulid,
    pub name: String,
    pub description: String,
    pub objects: Vec<GameObject>,

    /// Free-text code; never derived from or synchronized with `objects`
    pub code: String,
}

impl Scene {
    /// Create an empty scene with a code template embedding its name.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let code = scene_code_template(&name);
        Self {
            id: Ulid::new(),
            name,
            description: description.into(),
            objects: Vec::new(),
            code,
        }
    }

    pub fn object(&self, id: Ulid) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn object_mut(&mut self, id: Ulid) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }
}

/// A code-only project unit with no spatial objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Module {
    pub id: Ulid,
    pub name: String,
    pub description: String,
    pub code: String,
}

impl Module {
    /// Create a module with a code template embedding its name.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let code = module_code_template(&name);
        Self {
            id: Ulid::new(),
            name,
            description: description.into(),
            code,
        }
    }
}

/// A deletable sidebar entry: either a scene or a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Scene,
    Module,
}

/// The root aggregate; exactly one is live at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub name: String,
    pub config: ProjectConfig,
    pub scenes: Vec<Scene>,
    pub modules: Vec<Module>,
}

impl Project {
    /// Create an empty project with default config.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: ProjectConfig::default(),
            scenes: Vec::new(),
            modules: Vec::new(),
        }
    }

    pub fn scene(&self, id: Ulid) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    pub fn scene_mut(&mut self, id: Ulid) -> Option<&mut Scene> {
        self.scenes.iter_mut().find(|s| s.id == id)
    }

    pub fn module(&self, id: Ulid) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn module_mut(&mut self, id: Ulid) -> Option<&mut Module> {
        self.modules.iter_mut().find(|m| m.id == id)
    }
}

impl Default for Project {
    fn default() -> Self {
        sample_project()
    }
}

/// Code template for a freshly created scene.
pub fn scene_code_template(name: &str) -> String {
    format!(
        "class {name} extends Phaser.Scene {{\n  constructor() {{ super({{ key: '{name}' }}); }}\n  preload() {{}}\n  create() {{}}\n  update() {{}}\n}}"
    )
}

/// Code template for a freshly created module.
pub fn module_code_template(name: &str) -> String {
    format!(
        "export default class {name} {{\n  constructor(scene) {{ this.scene = scene; }}\n  update() {{}}\n  destroy() {{}}\n}}"
    )
}

// ========== Bundled starter project ==========

fn obj(
    name: &str,
    obj_type: ObjType,
    (x, y): (f32, f32),
    (w, h): (f32, f32),
    color: &str,
    locked: bool,
    props: &[(&str, PropValue)],
) -> GameObject {
    let mut object = GameObject::new(name, obj_type, x, y);
    object.w = w;
    object.h = h;
    object.color = color.to_string();
    object.locked = locked;
    for (key, value) in props {
        object.props.insert(key.to_string(), value.clone());
    }
    object
}

fn scene(name: &str, description: &str, objects: Vec<GameObject>, code: &str) -> Scene {
    let mut sc = Scene::new(name, description);
    sc.objects = objects;
    sc.code = code.to_string();
    sc
}

fn module(name: &str, description: &str, code: &str) -> Module {
    let mut m = Module::new(name, description);
    m.code = code.to_string();
    m
}

/// The starter project shown on first launch: three scenes with twenty
/// objects between them, and three helper modules.
pub fn sample_project() -> Project {
    use ObjType::*;
    use PropValue as P;

    let boot = scene(
        "BootScene",
        "Preloads assets and shows loading bar",
        vec![
            obj("loadingBg", Rectangle, (300.0, 300.0), (320.0, 30.0), "#333333", false,
                &[("fillColor", P::from("0x333333"))]),
            obj("loadingBar", Rectangle, (300.0, 300.0), (280.0, 22.0), "#4a7dff", false,
                &[("fillColor", P::from("0x4a7dff"))]),
            obj("loadingText", Text, (400.0, 260.0), (120.0, 24.0), "#34d399", false,
                &[("text", P::from("Loading...")),
                  ("fontSize", P::from("16px")),
                  ("fontFamily", P::from("monospace"))]),
        ],
        "class BootScene extends Phaser.Scene {\n  constructor() { super({ key: 'BootScene' }); }\n  preload() {\n    this.load.image('logo', 'assets/logo.png');\n    this.load.spritesheet('player', 'assets/player.png', { frameWidth: 32, frameHeight: 48 });\n    this.load.tilemapTiledJSON('level1', 'assets/level1.json');\n  }\n  create() { this.scene.start('GameScene'); }\n}",
    );

    let game = scene(
        "GameScene",
        "Main gameplay with physics and input",
        vec![
            obj("sky", Image, (400.0, 300.0), (800.0, 600.0), "#1a1a4e", true,
                &[("key", P::from("sky")), ("depth", P::from(0.0))]),
            obj("ground", Tilemap, (400.0, 568.0), (800.0, 64.0), "#4a3728", true,
                &[("key", P::from("level1")), ("layer", P::from("Ground"))]),
            obj("player", Sprite, (100.0, 420.0), (32.0, 48.0), "#4a7dff", false,
                &[("key", P::from("player")),
                  ("bounce", P::from(0.1)),
                  ("collideWorld", P::from(true)),
                  ("gravity", P::from(300.0))]),
            obj("enemy1", Sprite, (450.0, 420.0), (32.0, 32.0), "#ef4444", false,
                &[("key", P::from("slime")),
                  ("pattern", P::from("patrol")),
                  ("speed", P::from(80.0))]),
            obj("enemy2", Sprite, (620.0, 420.0), (32.0, 32.0), "#ef4444", false,
                &[("key", P::from("slime")),
                  ("pattern", P::from("patrol")),
                  ("speed", P::from(80.0))]),
            obj("coin1", Sprite, (260.0, 340.0), (16.0, 16.0), "#f59e0b", false,
                &[("key", P::from("coin")), ("animated", P::from(true))]),
            obj("coin2", Sprite, (380.0, 280.0), (16.0, 16.0), "#f59e0b", false,
                &[("key", P::from("coin")), ("animated", P::from(true))]),
            obj("coin3", Sprite, (540.0, 340.0), (16.0, 16.0), "#f59e0b", false,
                &[("key", P::from("coin")), ("animated", P::from(true))]),
            obj("platform1", Rectangle, (350.0, 380.0), (120.0, 16.0), "#6b5b3e", false,
                &[("isStatic", P::from(true))]),
            obj("platform2", Rectangle, (550.0, 310.0), (100.0, 16.0), "#6b5b3e", false,
                &[("isStatic", P::from(true))]),
            obj("spawnZone", Zone, (100.0, 300.0), (60.0, 200.0), "#94a3b8", false,
                &[("purpose", P::from("player_spawn"))]),
        ],
        "class GameScene extends Phaser.Scene {\n  constructor() { super({ key: 'GameScene' }); this.player = null; this.cursors = null; this.score = 0; }\n  create() {\n    const map = this.make.tilemap({ key: 'level1' });\n    const tileset = map.addTilesetImage('tiles', 'tileset');\n    const ground = map.createLayer('Ground', tileset);\n    ground.setCollisionByExclusion([-1]);\n    this.player = this.physics.add.sprite(100, 300, 'player');\n    this.player.setBounce(0.1);\n    this.player.setCollideWorldBounds(true);\n    this.physics.add.collider(this.player, ground);\n    this.cursors = this.input.keyboard.createCursorKeys();\n  }\n  update() {\n    if (this.cursors.left.isDown) { this.player.setVelocityX(-160); this.player.flipX = true; }\n    else if (this.cursors.right.isDown) { this.player.setVelocityX(160); this.player.flipX = false; }\n    else { this.player.setVelocityX(0); }\n    if (this.cursors.up.isDown && this.player.body.onFloor()) { this.player.setVelocityY(-330); }\n  }\n}",
    );

    let ui = scene(
        "UIScene",
        "HUD overlay for score and health",
        vec![
            obj("scoreLabel", Text, (16.0, 16.0), (100.0, 20.0), "#34d399", false,
                &[("text", P::from("Score: 0")),
                  ("fontSize", P::from("18px")),
                  ("fontFamily", P::from("monospace")),
                  ("stroke", P::from("#000")),
                  ("strokeThickness", P::from(3.0))]),
            obj("healthBarBg", Rectangle, (700.0, 30.0), (104.0, 14.0), "#333333", false, &[]),
            obj("healthBar", Rectangle, (700.0, 30.0), (100.0, 10.0), "#34d399", false, &[]),
            obj("livesIcon1", Sprite, (16.0, 50.0), (16.0, 16.0), "#ef4444", false,
                &[("key", P::from("heart"))]),
            obj("livesIcon2", Sprite, (38.0, 50.0), (16.0, 16.0), "#ef4444", false,
                &[("key", P::from("heart"))]),
            obj("livesIcon3", Sprite, (60.0, 50.0), (16.0, 16.0), "#ef4444", false,
                &[("key", P::from("heart"))]),
        ],
        "class UIScene extends Phaser.Scene {\n  constructor() { super({ key: 'UIScene' }); }\n  create() {\n    this.scoreText = this.add.text(16, 16, 'Score: 0', { fontSize: '18px', fontFamily: 'monospace', color: '#ffffff', stroke: '#000000', strokeThickness: 3 });\n    this.add.rectangle(700, 30, 104, 14, 0x333333);\n    this.healthBar = this.add.rectangle(700, 30, 100, 10, 0x00ff88);\n  }\n}",
    );

    Project {
        name: "my-phaser-game".to_string(),
        config: ProjectConfig::default(),
        scenes: vec![boot, game, ui],
        modules: vec![
            module(
                "PlayerController",
                "Player movement and animation",
                "export default class PlayerController {\n  constructor(scene, sprite) { this.scene = scene; this.sprite = sprite; this.speed = 160; }\n  update(cursors) { /* movement logic */ }\n}",
            ),
            module(
                "EnemyFactory",
                "Enemy spawning and AI patterns",
                "export default class EnemyFactory {\n  constructor(scene) { this.scene = scene; this.enemies = scene.physics.add.group(); }\n  spawn(x, y, type) { return this.enemies.create(x, y, type); }\n  update() { /* patrol logic */ }\n}",
            ),
            module(
                "AudioManager",
                "Sound playback and pooling",
                "export default class AudioManager {\n  constructor(scene) { this.scene = scene; this.sounds = new Map(); }\n  play(key) { this.sounds.get(key)?.sound.play(); }\n}",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_code_template_embeds_name() {
        let sc = Scene::new("TitleScene", "");
        assert!(sc.code.contains("class TitleScene extends Phaser.Scene"));
        assert!(sc.code.contains("key: 'TitleScene'"));
        assert!(sc.objects.is_empty());
    }

    #[test]
    fn test_module_code_template_embeds_name() {
        let m = Module::new("SaveSystem", "Persists progress");
        assert!(m.code.contains("export default class SaveSystem"));
    }

    #[test]
    fn test_sample_project_shape() {
        let project = sample_project();
        assert_eq!(project.scenes.len(), 3);
        assert_eq!(project.modules.len(), 3);

        let total: usize = project.scenes.iter().map(|s| s.objects.len()).sum();
        assert_eq!(total, 20);

        assert_eq!(project.config.width, 800.0);
        assert_eq!(project.config.height, 600.0);
        assert!(project.config.pixel_art);
    }

    #[test]
    fn test_sample_project_ids_unique() {
        let project = sample_project();
        let mut ids: Vec<Ulid> = project
            .scenes
            .iter()
            .flat_map(|s| s.objects.iter().map(|o| o.id))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_project_snapshot_round_trip() {
        let project = sample_project();
        let json = serde_json::to_string(&project).unwrap();
        let restored: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, project);
    }

    #[test]
    fn test_scene_lookup_by_id() {
        let project = sample_project();
        let id = project.scenes[1].id;
        assert_eq!(project.scene(id).unwrap().name, "GameScene");
        assert!(project.scene(Ulid::new()).is_none());
    }
}
