//! The counter app used to verify a fresh setup

use serde::Serialize;

use crate::platform::Platform;

pub const FIRST_APP_TITLE: &str = "Build Your First Flutter App";
pub const FIRST_APP_SUBTITLE: &str = "Create a simple counter app to test your Flutter setup";

/// Commands that scaffold the project
pub const CREATE_COMMANDS: [&str; 2] = ["flutter create my_first_app", "cd my_first_app"];

/// Complete `lib/main.dart` of the counter app
pub const COUNTER_APP_SOURCE: &str = r#"import 'package:flutter/material.dart';

void main() {
  runApp(const MyApp());
}

class MyApp extends StatelessWidget {
  const MyApp({super.key});

  @override
  Widget build(BuildContext context) {
    return MaterialApp(
      title: 'My First Flutter App',
      theme: ThemeData(
        colorScheme: ColorScheme.fromSeed(seedColor: Colors.blue),
        useMaterial3: true,
      ),
      home: const MyHomePage(title: 'Flutter Counter App'),
    );
  }
}

class MyHomePage extends StatefulWidget {
  const MyHomePage({super.key, required this.title});
  final String title;

  @override
  State<MyHomePage> createState() => _MyHomePageState();
}

class _MyHomePageState extends State<MyHomePage> {
  int _counter = 0;

  void _incrementCounter() {
    setState(() {
      _counter++;
    });
  }

  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(
        backgroundColor: Theme.of(context).colorScheme.inversePrimary,
        title: Text(widget.title),
      ),
      body: Center(
        child: Column(
          mainAxisAlignment: MainAxisAlignment.center,
          children: <Widget>[
            const Text('You have pushed the button this many times:'),
            Text(
              '$_counter',
              style: Theme.of(context).textTheme.headlineMedium,
            ),
          ],
        ),
      ),
      floatingActionButton: FloatingActionButton(
        onPressed: _incrementCounter,
        tooltip: 'Increment',
        child: const Icon(Icons.add),
      ),
    );
  }
}
"#;

/// Kind of device a run target launches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Desktop,
    Web,
    Mobile,
}

/// A `flutter run` invocation for one device type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunTarget {
    pub label: String,
    pub command: String,
    pub device: DeviceKind,
}

/// Enabling USB debugging on an Android phone: `(heading, detail)`
pub const PHONE_SETUP_STEPS: [(&str, &str); 3] = [
    (
        "Enable Developer Options",
        "Go to Settings → About Phone → Tap \"Build Number\" 7 times",
    ),
    (
        "Enable USB Debugging",
        "Settings → Developer Options → Enable \"USB Debugging\"",
    ),
    (
        "Connect and Run",
        "Connect via USB cable and run: flutter run",
    ),
];

/// Ways to run the sample app; the desktop target follows `platform`
pub fn run_targets(platform: Platform) -> Vec<RunTarget> {
    vec![
        RunTarget {
            label: format!("{} Desktop", platform.label()),
            command: format!("flutter run -d {}", platform.id()),
            device: DeviceKind::Desktop,
        },
        RunTarget {
            label: "Web Browser".to_string(),
            command: "flutter run -d chrome".to_string(),
            device: DeviceKind::Web,
        },
        RunTarget {
            label: "Android Device".to_string(),
            command: "flutter run -d android".to_string(),
            device: DeviceKind::Mobile,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_target_follows_platform() {
        let targets = run_targets(Platform::Linux);
        assert_eq!(targets.len(), 3);
        assert_eq!(targets[0].label, "Linux Desktop");
        assert_eq!(targets[0].command, "flutter run -d linux");

        let targets = run_targets(Platform::Windows);
        assert_eq!(targets[0].command, "flutter run -d windows");
    }

    #[test]
    fn test_web_and_android_targets_are_fixed() {
        for platform in Platform::ALL {
            let targets = run_targets(platform);
            assert_eq!(targets[1].command, "flutter run -d chrome");
            assert_eq!(targets[2].command, "flutter run -d android");
        }
    }

    #[test]
    fn test_counter_source_is_complete() {
        assert!(COUNTER_APP_SOURCE.starts_with("import 'package:flutter/material.dart';"));
        assert!(COUNTER_APP_SOURCE.contains("void main()"));
        assert!(COUNTER_APP_SOURCE.contains("_incrementCounter"));
        let opens = COUNTER_APP_SOURCE.matches('{').count();
        let closes = COUNTER_APP_SOURCE.matches('}').count();
        assert_eq!(opens, closes, "braces should balance");
    }
}
